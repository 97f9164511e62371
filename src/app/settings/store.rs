use std::fs;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::config_dirs;

/// Persisted user preferences. Page size is deliberately not here: the
/// pager shows a fixed ten products per page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Name of the color theme to apply at startup ("dark" or "light").
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            theme: "dark".to_string(),
        }
    }
}

const SETTINGS_FILE: &str = "settings.toml";

/// Load settings from the project config directory. Missing file or
/// missing config directory both fall back to defaults; only a present but
/// unreadable/unparsable file is an error.
pub fn load_settings() -> Result<Settings> {
    let Some(dir) = config_dirs::project_config_dir() else {
        return Ok(Settings::default());
    };
    let path = dir.join(SETTINGS_FILE);
    if !path.exists() {
        return Ok(Settings::default());
    }
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    toml::from_str(&text)
        .with_context(|| format!("failed to parse settings file {}", path.display()))
}

/// Write settings to the project config directory, creating it if needed.
pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dirs::project_config_dir()
        .context("no config directory available on this platform")?;
    config_dirs::ensure_dirs_exist().context("failed to create config directory")?;
    let path = dir.join(SETTINGS_FILE);
    let text = toml::to_string_pretty(settings).context("failed to serialize settings")?;
    fs::write(&path, text)
        .with_context(|| format!("failed to write settings file {}", path.display()))?;
    Ok(())
}

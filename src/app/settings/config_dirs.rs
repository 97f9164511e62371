use std::path::PathBuf;

use directories_next::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "cardZoom")
}

/// Directory holding the settings file, if the platform exposes one.
pub fn project_config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Directory for runtime artifacts such as the log file.
pub fn user_cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

/// Create the config and cache directories if they are missing.
pub fn ensure_dirs_exist() -> std::io::Result<()> {
    for dir in [project_config_dir(), user_cache_dir()].into_iter().flatten() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

use std::path::PathBuf;
use std::time::Duration;

use tracing::{info, warn};

use crate::app::{settings, App};
use crate::data;
use crate::input::{poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal};
use crate::ui;

/// Load the catalog, set up the terminal, and run the event loop until the
/// user quits. `data_path` of `None` means the bundled sample catalog;
/// `theme_override` comes from the CLI and wins over the settings file.
pub fn run_app(data_path: Option<PathBuf>, theme_override: Option<String>) -> anyhow::Result<()> {
    let products = match &data_path {
        Some(path) => data::load_products(path)?,
        None => data::load_default()?,
    };
    let source_label = data_path
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "bundled sample".to_string());
    info!(count = products.len(), source = %source_label, "catalog loaded");

    let mut app = App::new(products, data_path);

    // Load persisted settings from disk if available and apply.
    match settings::load_settings() {
        Ok(s) => app.settings = s,
        Err(e) => warn!("failed to load settings, using defaults: {e:#}"),
    }
    if let Some(theme) = theme_override {
        app.settings.theme = theme;
    }
    ui::colors::set_theme(&app.settings.theme);

    let mut terminal = init_terminal()?;

    // Main event loop
    loop {
        terminal.draw(|f| ui::ui(f, &app))?;

        if poll(Duration::from_millis(100))? {
            match read_event()? {
                InputEvent::Key(key) => {
                    if handlers::handle_key(&mut app, key.code)? {
                        break;
                    }
                }
                InputEvent::Resize(_, _) => { /* redraw on next loop */ }
                InputEvent::Other => {}
            }
        }
    }

    // Restore terminal state before exiting.
    restore_terminal(terminal)?;
    Ok(())
}

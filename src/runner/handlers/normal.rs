use tracing::info;

use crate::app::settings::keybinds;
use crate::app::{settings, App, Direction};
use crate::data;
use crate::errors;
use crate::input::KeyCode;

/// Keys while browsing the card list.
pub fn handle_normal(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    if keybinds::is_quit(&code) {
        return Ok(true);
    }

    if keybinds::is_search(&code) {
        app.open_search();
    } else if keybinds::is_down(&code) {
        app.select_next();
    } else if keybinds::is_up(&code) {
        app.select_prev();
    } else if keybinds::is_next_page(&code) {
        app.change_page(Direction::Next);
    } else if keybinds::is_prev_page(&code) {
        app.change_page(Direction::Prev);
    } else if keybinds::is_enter(&code) {
        app.open_selected();
    } else if keybinds::is_reload(&code) {
        reload_catalog(app);
    } else if keybinds::is_theme_toggle(&code) {
        app.settings.theme = crate::ui::colors::toggle();
        // Persisting the toggle is best-effort; a read-only config dir
        // should not interrupt browsing.
        let _ = settings::save_settings(&app.settings);
    }
    Ok(false)
}

/// Re-read the catalog from its original source and run it through the
/// controller's replacement path. Failure leaves the current catalog
/// untouched and surfaces as a dialog.
fn reload_catalog(app: &mut App) {
    let loaded = match &app.data_path {
        Some(path) => data::load_products(path),
        None => data::load_default(),
    };
    match loaded {
        Ok(products) => {
            info!(count = products.len(), "catalog reloaded");
            app.reload(products);
        }
        Err(err) => app.show_error(errors::render_data_error(&err)),
    }
}

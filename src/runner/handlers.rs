//! Split handlers: thin wrapper delegating to submodules, one per mode.

pub mod detail;
pub mod normal;
pub mod search;

pub use detail::handle_detail;
pub use normal::handle_normal;
pub use search::handle_search;

use crate::app::settings::keybinds;
use crate::app::{App, Mode};
use crate::input::KeyCode;

/// Top-level key handler that dispatches on the current mode. Returns
/// `Ok(true)` when the application should exit.
pub fn handle_key(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    match &mut app.mode {
        Mode::Normal => handle_normal(app, code),
        Mode::Search { .. } => handle_search(app, code),
        Mode::Detail { .. } => handle_detail(app, code),
        Mode::Message { .. } => {
            // Any of the dismiss keys closes the dialog; everything else is
            // swallowed so a stray keypress cannot act on the list below.
            if keybinds::is_enter(&code) || keybinds::is_esc(&code) {
                app.mode = Mode::Normal;
            }
            Ok(false)
        }
    }
}

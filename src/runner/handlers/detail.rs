use crate::app::settings::keybinds;
use crate::app::{App, Mode};
use crate::input::KeyCode;

/// Keys in the single-product view: Esc or Backspace go back to the list,
/// q still quits.
pub fn handle_detail(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    if keybinds::is_quit(&code) {
        return Ok(true);
    }
    if keybinds::is_esc(&code) || keybinds::is_backspace(&code) {
        app.mode = Mode::Normal;
    }
    Ok(false)
}

use crate::app::settings::keybinds;
use crate::app::{App, Mode};
use crate::input::KeyCode;

/// Keys while editing the search term. The active filter changes only on
/// submit; Esc abandons the edit.
pub fn handle_search(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    if let Mode::Search { buffer } = &mut app.mode {
        if keybinds::is_enter(&code) {
            // enter/submit
            let term = buffer.clone();
            app.mode = Mode::Normal;
            app.apply_search(&term);
        } else if keybinds::is_backspace(&code) {
            buffer.pop();
        } else if keybinds::is_esc(&code) {
            app.mode = Mode::Normal;
        } else if let KeyCode::Char(c) = code {
            buffer.push(c);
        }
    }
    Ok(false)
}

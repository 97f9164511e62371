// Centralised keybind predicates for the application.
//
// This file exposes small, well-named helper functions like `is_quit` and
// `is_next_page` so the rest of the codebase can refer to key actions
// rather than raw `KeyCode` patterns. The functions are intentionally
// simple wrappers today so they can later be wired to user-configurable
// settings without touching the handlers.

use crate::input::KeyCode;

pub fn is_quit(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('q'))
}

pub fn is_down(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Down | KeyCode::Char('j'))
}

pub fn is_up(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Up | KeyCode::Char('k'))
}

pub fn is_next_page(code: &KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('n')
    )
}

pub fn is_prev_page(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Left | KeyCode::PageUp | KeyCode::Char('p'))
}

pub fn is_search(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('/'))
}

pub fn is_enter(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Enter)
}

pub fn is_esc(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Esc)
}

pub fn is_backspace(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Backspace)
}

pub fn is_reload(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('r'))
}

pub fn is_theme_toggle(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('t'))
}

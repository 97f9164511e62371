use once_cell::sync::Lazy;
use ratatui::style::{Modifier, Style};
use std::sync::Mutex;

use crate::ui::Theme;

/// Concrete runtime styles for every widget, derived once per theme change
/// so the render path never rebuilds styles.
#[derive(Clone, Debug)]
pub struct Colors {
    pub header_style: Style,
    pub search_block_style: Style,
    pub search_active_style: Style,
    pub card_block_style: Style,
    pub card_selected_style: Style,
    pub card_tag_style: Style,
    pub detail_block_style: Style,
    pub detail_title_style: Style,
    pub footer_style: Style,
    pub pager_disabled_style: Style,
    pub dialog_style: Style,
}

static CURRENT: Lazy<Mutex<(String, Colors)>> =
    Lazy::new(|| Mutex::new(("dark".to_string(), derive(&Theme::dark()))));

fn derive(theme: &Theme) -> Colors {
    let base = Style::default().fg(theme.fg).bg(theme.bg);
    Colors {
        header_style: base.add_modifier(Modifier::BOLD),
        search_block_style: base,
        search_active_style: Style::default().fg(theme.accent).bg(theme.bg),
        card_block_style: base,
        card_selected_style: Style::default()
            .fg(theme.bg)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD),
        card_tag_style: Style::default().fg(theme.muted).bg(theme.bg),
        detail_block_style: base,
        detail_title_style: Style::default()
            .fg(theme.accent)
            .bg(theme.bg)
            .add_modifier(Modifier::BOLD),
        footer_style: base,
        pager_disabled_style: Style::default().fg(theme.muted).bg(theme.bg),
        dialog_style: Style::default().fg(theme.fg).bg(theme.bg),
    }
}

/// Install the theme with the given settings name ("dark"/"light").
pub fn set_theme(name: &str) {
    let theme = Theme::by_name(name);
    let mut g = CURRENT.lock().unwrap();
    *g = (name.to_string(), derive(&theme));
}

/// Derive concrete runtime Styles from the provided Theme and store them.
pub fn set_from_theme(name: &str, theme: &Theme) {
    let mut g = CURRENT.lock().unwrap();
    *g = (name.to_string(), derive(theme));
}

pub fn current() -> Colors {
    CURRENT.lock().unwrap().1.clone()
}

pub fn current_name() -> String {
    CURRENT.lock().unwrap().0.clone()
}

/// Flip between the two built-in themes and return the new name so the
/// caller can persist it.
pub fn toggle() -> String {
    let next = if current_name() == "dark" { "light" } else { "dark" };
    set_theme(next);
    next.to_string()
}

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::{App, Mode};

pub mod cards;
pub mod colors;
pub mod detail;
pub mod dialogs;
pub mod header;
pub mod pager;
pub mod search_bar;
pub mod theme;

pub use theme::Theme;

pub fn ui(f: &mut Frame, app: &App) {
    // Header (3), search bar (3), main area (min), pager/help footer (3)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(f.area());

    header::render(f, chunks[0], app);
    search_bar::render(f, chunks[1], app);

    // The main area is either the card list or the single-product view.
    match &app.mode {
        Mode::Detail { id } => detail::render(f, chunks[2], app, id),
        _ => cards::render(f, chunks[2], app),
    }

    pager::render(f, chunks[3], &app.catalog);

    // Modal
    if let Mode::Message { title, content } = &app.mode {
        dialogs::draw_message(f, f.area(), title, content);
    }
}

use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, Mode};

/// Search box. Shows the active filter term while browsing; while editing
/// it shows the live buffer with a cursor marker instead.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = crate::ui::colors::current();
    let (text, style, title) = match &app.mode {
        Mode::Search { buffer } => (
            format!("{buffer}_"),
            colors.search_active_style,
            "Search tags (Enter: apply, Esc: cancel)",
        ),
        _ => (
            app.catalog.filter_term().to_string(),
            colors.search_block_style,
            "Search tags (/)",
        ),
    };
    let p = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(style),
    );
    f.render_widget(p, area);
}

use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;

/// Top bar: application title, catalog size, and the active filter if any.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = crate::ui::colors::current();
    let filter = if app.catalog.has_filter() {
        format!("  |  filter: \"{}\"", app.catalog.filter_term())
    } else {
        String::new()
    };
    let text = format!(
        "cardZoom  |  {} products{}",
        app.catalog.products().len(),
        filter
    );
    let p = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .style(colors.header_style),
    );
    f.render_widget(p, area);
}

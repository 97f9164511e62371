use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::Catalog;

const KEY_HELP: &str = "q:quit  /:search  \u{2190}/\u{2192}:page  \u{2191}/\u{2193}:select  Enter:open  r:reload  t:theme";

/// Pagination footer: Prev/Next labels (greyed out at the boundaries the
/// controller reports) around a page position line, with the key help as
/// the block title.
pub fn render(f: &mut Frame, area: Rect, catalog: &Catalog) {
    let colors = crate::ui::colors::current();
    let prev_style = if catalog.is_prev_disabled() {
        colors.pager_disabled_style
    } else {
        colors.footer_style
    };
    let next_style = if catalog.is_next_disabled() {
        colors.pager_disabled_style
    } else {
        colors.footer_style
    };

    let line = Line::from(vec![
        Span::styled("\u{25c0} Prev", prev_style),
        Span::raw("   "),
        Span::raw(format_pager_line(
            catalog.page_number(),
            catalog.page_count(),
            catalog.visible_page().len(),
            catalog.filtered_len(),
        )),
        Span::raw("   "),
        Span::styled("Next \u{25b6}", next_style),
    ]);

    let p = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(KEY_HELP)
            .style(colors.footer_style),
    );
    f.render_widget(p, area);
}

/// Pure formatting for the page position, e.g. "Page 2 of 3 (10 of 25 products)".
pub fn format_pager_line(
    page_number: usize,
    page_count: usize,
    shown: usize,
    filtered_len: usize,
) -> String {
    format!("Page {page_number} of {page_count} ({shown} of {filtered_len} products)")
}

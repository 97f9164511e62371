use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::ui::cards::{format_price, format_tags};

/// Single-product view. The id is resolved against the full catalog, so a
/// product hidden by the active filter still opens; an id that no longer
/// exists (e.g. after a reload) renders a placeholder instead of a fault.
pub fn render(f: &mut Frame, area: Rect, app: &App, id: &str) {
    let colors = crate::ui::colors::current();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Product {id} (Esc: back)"))
        .style(colors.detail_block_style);

    let Some(product) = app.catalog.product_by_id(id) else {
        let p = Paragraph::new("Product not found.").block(block);
        f.render_widget(p, area);
        return;
    };

    // Wrap the description to the inner width; borders take two columns.
    let width = area.width.saturating_sub(4).max(20) as usize;
    let mut lines = vec![
        Line::from(Span::styled(
            product.title.clone(),
            colors.detail_title_style,
        )),
        Line::from(format_price(product.price)),
        Line::from(""),
    ];
    for wrapped in textwrap::wrap(&product.description, width) {
        lines.push(Line::from(wrapped.into_owned()));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("tags: {}", format_tags(product)),
        colors.card_tag_style,
    )));

    let p = Paragraph::new(Text::from(lines)).block(block);
    f.render_widget(p, area);
}

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::data::Product;

/// Render the visible page of product cards with the selected row
/// highlighted, or the "no results" placeholder when an active filter
/// matched nothing.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = crate::ui::colors::current();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Products")
        .style(colors.card_block_style);

    if app.catalog.no_results() {
        let p = Paragraph::new("No products match that tag.")
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let page = app.catalog.visible_page();
    let items: Vec<ListItem> = page
        .iter()
        .map(|product| {
            let text = Text::from(vec![
                Line::from(format_card_line(product)),
                Line::from(Span::styled(
                    format!("    {}", format_tags(product)),
                    colors.card_tag_style,
                )),
            ]);
            ListItem::new(text)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(colors.card_selected_style);
    let mut state = ListState::default();
    state.select(if page.is_empty() {
        None
    } else {
        Some(app.selected.min(page.len() - 1))
    });
    f.render_stateful_widget(list, area, &mut state);
}

/// One-line summary of a card: title and price. Kept as a pure function so
/// tests can pin the format without rendering.
pub fn format_card_line(product: &Product) -> String {
    format!("{}  {}", product.title, format_price(product.price))
}

pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) => format!("${value:.2}"),
        None => "-".to_string(),
    }
}

/// Comma-joined tag labels; tags without usable text are skipped.
pub fn format_tags(product: &Product) -> String {
    let labels: Vec<&str> = product.tags.iter().filter_map(|t| t.label()).collect();
    if labels.is_empty() {
        "(untagged)".to_string()
    } else {
        labels.join(", ")
    }
}

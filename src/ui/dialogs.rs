use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Centered modal dialog with a dismiss hint. Used for reload failures and
/// other messages that should interrupt browsing.
pub fn draw_message(f: &mut Frame, area: Rect, title: &str, content: &str) {
    let colors = crate::ui::colors::current();
    let rect = centered_rect(60, 40, area);
    f.render_widget(Clear, rect);
    let body = format!("{content}\n\n(Enter or Esc to dismiss)");
    let p = Paragraph::new(body).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .style(colors.dialog_style),
    );
    f.render_widget(p, rect);
}

/// Rect covering `percent_x` by `percent_y` of `r`, centered.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(r);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(vertical[1]);
    horizontal[1]
}

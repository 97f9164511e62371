use super::*;
use crate::app::types::Direction;

impl App {
    /// Number of rows on the current page.
    pub fn visible_len(&self) -> usize {
        self.catalog.visible_page().len()
    }

    /// Move the selection down by one row, clamping at the last row of the
    /// page.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible_len() {
            self.selected += 1;
        }
    }

    /// Move the selection up by one row, clamping at zero.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Ensure `selected` is within bounds of the visible page.
    pub fn clamp_selected(&mut self) {
        self.selected = self
            .selected
            .min(self.visible_len().saturating_sub(1));
    }

    /// Flip to the next or previous page and put the selection back at the
    /// top. Boundary requests are absorbed by the controller and leave the
    /// selection where it was.
    pub fn change_page(&mut self, direction: Direction) {
        let before = self.catalog.offset();
        self.catalog.change_page(direction);
        if self.catalog.offset() != before {
            self.selected = 0;
        }
    }

    /// The product under the selection cursor, if the page is non-empty.
    pub fn selected_product(&self) -> Option<&crate::data::Product> {
        self.catalog.visible_page().get(self.selected).copied()
    }
}

/// Pagination direction accepted by the catalog controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Interaction mode of the application: the card list is `Normal`, the
/// single-product view is `Detail`, and the remaining variants are modal
/// overlays on top of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the card list.
    Normal,
    /// Editing the search term. `buffer` is the in-progress text; the
    /// active filter is untouched until the edit is submitted.
    Search { buffer: String },
    /// Viewing a single product, addressed by id so the view survives
    /// filtering (and degrades to "not found" after a reload removes it).
    Detail { id: String },
    /// Modal message dialog, e.g. a failed catalog reload.
    Message { title: String, content: String },
}

use crate::app::types::Direction;
use crate::data::Product;

/// Number of products shown per page. Fixed; the pager has no other
/// configuration.
pub const PAGE_SIZE: usize = 10;

/// Pagination and tag-filter state over a read-only product collection.
///
/// This struct intentionally stores only UI-independent state so it can be
/// unit-tested without rendering. The filtered view is kept as an index
/// subsequence into the catalog, so filtering never clones or reorders
/// products, and the visible page is re-derived from it on demand.
///
/// None of the operations here can fail: out-of-range pagination requests
/// clamp or no-op, and an empty search term means "clear the filter".
#[derive(Debug, Clone)]
pub struct Catalog {
    /// The full product collection. Never mutated, only replaced wholesale.
    products: Vec<Product>,
    /// Active search term, trimmed and lowercased. Empty = no filter.
    filter_term: String,
    /// Indices into `products` matching the active filter, in catalog order.
    filtered: Vec<usize>,
    /// Start index of the visible window into `filtered`. Always a multiple
    /// of `PAGE_SIZE`; page changes and filtering keep it in range.
    offset: usize,
}

impl Catalog {
    /// Create a controller over `products` with no filter, at the first page.
    pub fn new(products: Vec<Product>) -> Self {
        let filtered = (0..products.len()).collect();
        Catalog {
            products,
            filter_term: String::new(),
            filtered,
            offset: 0,
        }
    }

    /// Replace the whole catalog (the upstream data changed). The filtered
    /// view resets to the new catalog and the pager returns to the first
    /// page; a previously active search term is discarded.
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.filter_term.clear();
        self.filtered = (0..self.products.len()).collect();
        self.offset = 0;
    }

    /// The full, unfiltered collection.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products matching the active filter.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Start index of the visible window into the filtered view.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The active (normalized) search term. Empty when no filter is set.
    pub fn filter_term(&self) -> &str {
        &self.filter_term
    }

    pub fn has_filter(&self) -> bool {
        !self.filter_term.is_empty()
    }

    /// Products currently on screen: the filtered view sliced from `offset`
    /// to `offset + PAGE_SIZE`, clipped to the available length. Running
    /// past the end is not an error, the page is simply shorter (possibly
    /// empty).
    pub fn visible_page(&self) -> Vec<&Product> {
        self.filtered
            .iter()
            .skip(self.offset)
            .take(PAGE_SIZE)
            .map(|&i| &self.products[i])
            .collect()
    }

    /// Move one page forward or back. Requests beyond either boundary are
    /// no-ops so callers may invoke this unconditionally; the disablement
    /// flags exist only so the pager can grey out its labels.
    pub fn change_page(&mut self, direction: Direction) {
        match direction {
            Direction::Next => {
                let candidate = self.offset + PAGE_SIZE;
                // do not go past the end of the filtered view
                if candidate < self.filtered.len() {
                    self.offset = candidate;
                }
            }
            Direction::Prev => {
                // do not go below 0
                self.offset = self.offset.saturating_sub(PAGE_SIZE);
            }
        }
    }

    /// Apply a tag search. The term is trimmed and lowercased first; an
    /// empty result of that normalization clears the filter. Either way the
    /// pager returns to the first page.
    pub fn filter_by_tag(&mut self, search_term: &str) {
        let term = search_term.trim().to_lowercase();

        // empty search -> reset to all products
        if term.is_empty() {
            self.filter_term.clear();
            self.filtered = (0..self.products.len()).collect();
            self.offset = 0;
            return;
        }

        self.filtered = self
            .products
            .iter()
            .enumerate()
            .filter(|(_, product)| product.matches_tag(&term))
            .map(|(index, _)| index)
            .collect();
        self.filter_term = term;
        self.offset = 0;
    }

    pub fn is_prev_disabled(&self) -> bool {
        self.offset == 0
    }

    pub fn is_next_disabled(&self) -> bool {
        self.offset + PAGE_SIZE >= self.filtered.len()
    }

    /// True when an active filter left nothing to show. Without a filter an
    /// empty page is just an empty catalog, not a "no results" state.
    pub fn no_results(&self) -> bool {
        self.has_filter() && self.visible_page().is_empty()
    }

    /// 1-based page number for the pager line.
    pub fn page_number(&self) -> usize {
        self.offset / PAGE_SIZE + 1
    }

    /// Total page count for the pager line, at least 1 even when the
    /// filtered view is empty.
    pub fn page_count(&self) -> usize {
        self.filtered.len().div_ceil(PAGE_SIZE).max(1)
    }

    /// Look up a product by id in the full catalog, ignoring any active
    /// filter. Used by the single-product view.
    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

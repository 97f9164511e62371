use std::path::PathBuf;

use crate::app::settings::Settings;
use crate::app::types::Mode;
use crate::data::Product;

use self::catalog::Catalog;

pub mod catalog;

mod selection;

/// Top-level application state: the catalog controller plus the
/// presentation-side state the controller deliberately does not own
/// (interaction mode, selected row, settings, where the data came from).
pub struct App {
    pub catalog: Catalog,
    pub mode: Mode,
    /// Selected row within the visible page, clamped to its length.
    pub selected: usize,
    pub settings: Settings,
    /// Catalog file backing this session; `None` means the bundled sample.
    /// Kept so the reload key can re-read the same source.
    pub data_path: Option<PathBuf>,
}

impl App {
    pub fn new(products: Vec<Product>, data_path: Option<PathBuf>) -> Self {
        App {
            catalog: Catalog::new(products),
            mode: Mode::Normal,
            selected: 0,
            settings: Settings::default(),
            data_path,
        }
    }

    /// Feed a freshly loaded catalog through the controller's replacement
    /// path and reset presentation state to the top of the first page.
    pub fn reload(&mut self, products: Vec<Product>) {
        self.catalog.replace_products(products);
        self.selected = 0;
        self.mode = Mode::Normal;
    }

    /// Submit a search: the controller applies the filter and the selection
    /// returns to the top of the (new) first page.
    pub fn apply_search(&mut self, term: &str) {
        self.catalog.filter_by_tag(term);
        self.selected = 0;
    }

    /// Begin editing the search term, seeded with the active filter so a
    /// submitted-but-unchanged edit is a no-op.
    pub fn open_search(&mut self) {
        self.mode = Mode::Search {
            buffer: self.catalog.filter_term().to_string(),
        };
    }

    /// Open the single-product view for the currently selected row, if any.
    pub fn open_selected(&mut self) {
        if let Some(product) = self.selected_product() {
            self.mode = Mode::Detail {
                id: product.id.clone(),
            };
        }
    }

    /// Show a modal error dialog.
    pub fn show_error(&mut self, content: String) {
        self.mode = Mode::Message {
            title: "Error".to_string(),
            content,
        };
    }
}

//! Catalog data source: product model plus JSON loading.
//!
//! The browser never fetches anything over the network; a catalog is a JSON
//! array of products read once from disk (or from the sample bundled into
//! the binary) and handed to the controller wholesale.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod product;

pub use product::{Product, Tag};

/// Sample catalog compiled into the binary, used when no `--data` file is
/// given. Kept as plain JSON so it exercises the same decoding path as an
/// on-disk catalog.
const SAMPLE_CATALOG: &str = include_str!("../../data/full-products.json");

/// Errors produced while loading a catalog file.
#[derive(Error, Debug)]
pub enum DataError {
    /// The file could not be read at all.
    #[error("failed to read catalog file `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a valid product array.
    #[error("failed to parse catalog file `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The catalog compiled into the binary failed to decode.
    #[error("failed to parse bundled sample catalog: {0}")]
    Embedded(#[source] serde_json::Error),
}

/// Load a catalog from a JSON file containing an array of products.
///
/// Tag decoding is lenient (see [`product::Tag`]); a malformed `tags` value
/// never fails the load. A product without a usable `id` does.
pub fn load_products(path: &Path) -> Result<Vec<Product>, DataError> {
    let text = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode the bundled sample catalog.
pub fn load_default() -> Result<Vec<Product>, DataError> {
    serde_json::from_str(SAMPLE_CATALOG).map_err(DataError::Embedded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_sample_catalog_decodes() {
        let products = load_default().unwrap();
        assert_eq!(products.len(), 25);
        // At least one product carries tags so the search demo has something
        // to match against.
        assert!(products.iter().any(|p| !p.tags.is_empty()));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_products(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}

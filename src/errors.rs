//! User-facing error rendering for the message dialog.

use crate::data::DataError;

/// Render a catalog loading error into dialog text. The first line says
/// what failed, the second what the user can do about it.
pub fn render_data_error(err: &DataError) -> String {
    match err {
        DataError::Io { path, source } => format!(
            "Could not read catalog file {}:\n{}\n\nCheck that the file exists and is readable.",
            path.display(),
            source
        ),
        DataError::Parse { path, source } => format!(
            "Catalog file {} is not a valid product list:\n{}\n\nExpected a JSON array of products with an `id` field.",
            path.display(),
            source
        ),
        DataError::Embedded(source) => format!(
            "The bundled sample catalog failed to load:\n{}",
            source
        ),
    }
}

//! Error types for loading the book catalog.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading books from disk.
///
/// A missing file is not one of them: the catalog is simply empty.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file exists but could not be read.
    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array of books.
    #[error("Failed to parse catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

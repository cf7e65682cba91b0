//! Loading the book list from its JSON file.
//!
//! The file is read once at startup. Property names are matched
//! case-insensitively, so `pageCount`, `PageCount` and `pagecount` all bind to
//! [`Book::page_count`](crate::model::Book::page_count).

pub mod error;

pub use error::*;

use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};

use crate::model::Book;

/// Default location of the catalog, relative to the working directory.
pub const DEFAULT_BOOKS_PATH: &str = "books.json";

/// Loads every book from `path`.
///
/// Returns an empty list when the file does not exist. Any other I/O failure
/// and any malformed content is reported as a [`CatalogError`].
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_books(path: impl AsRef<Path>) -> Result<Vec<Book>, CatalogError> {
    let path = path.as_ref();
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Catalog file not found, starting with no books");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    debug!(bytes = json.len(), "Read catalog");

    let books = parse_books(&json).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(size = books.len(), "Loaded books");
    Ok(books)
}

/// Parses a JSON array of books, ignoring the case of property names.
///
/// A literal `null` document yields no books.
pub fn parse_books(json: &str) -> Result<Vec<Book>, serde_json::Error> {
    let value: Value = serde_json::from_str(json)?;
    let value = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    };
    serde_json::from_value(value)
}

// Only the top level of each record is folded; nested values keep their keys.
fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, value)| (key.to_lowercase(), value))
                .collect::<Map<String, Value>>(),
        ),
        other => other,
    }
}

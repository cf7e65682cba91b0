//! Environment-driven configuration.

use std::path::PathBuf;

use tracing::warn;

use crate::catalog::DEFAULT_BOOKS_PATH;

/// Environment variable naming the catalog file.
pub const BOOKS_PATH_VAR: &str = "BOOKS_PATH";
/// Environment variable holding the size of the basic-information listing.
pub const DEMO_COUNT_VAR: &str = "QUERY_DEMO_COUNT";

const DEFAULT_DEMO_COUNT: usize = 3;

/// Settings for the demo binary.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub books_path: PathBuf,
    pub demo_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            books_path: PathBuf::from(DEFAULT_BOOKS_PATH),
            demo_count: DEFAULT_DEMO_COUNT,
        }
    }
}

impl Config {
    /// Reads the process environment, falling back to defaults.
    ///
    /// The binary loads a `.env` file into the environment before calling this.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup.
    ///
    /// An unparsable count is logged and replaced by the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let books_path = lookup(BOOKS_PATH_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.books_path);

        let demo_count = match lookup(DEMO_COUNT_VAR) {
            None => defaults.demo_count,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = %raw, var = DEMO_COUNT_VAR, "Invalid count, using default");
                defaults.demo_count
            }),
        };

        Self {
            books_path,
            demo_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(Config::from_lookup(lookup_from(&[])), Config::default());
    }

    #[test]
    fn test_reads_both_values() {
        let config = Config::from_lookup(lookup_from(&[
            (BOOKS_PATH_VAR, "/data/books.json"),
            (DEMO_COUNT_VAR, " 7 "),
        ]));
        assert_eq!(config.books_path, PathBuf::from("/data/books.json"));
        assert_eq!(config.demo_count, 7);
    }

    #[test]
    fn test_bad_count_falls_back() {
        let config = Config::from_lookup(lookup_from(&[(DEMO_COUNT_VAR, "many")]));
        assert_eq!(config.demo_count, 3);
    }

    #[test]
    fn test_blank_path_falls_back() {
        let config = Config::from_lookup(lookup_from(&[(BOOKS_PATH_VAR, "  ")]));
        assert_eq!(config.books_path, PathBuf::from("books.json"));
    }
}

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// A book record as loaded from the catalog file.
///
/// Property names are matched case-insensitively by the loader, which folds
/// every key to lowercase before handing the object to serde. That is why the
/// `rename` attributes below are all lowercase.
///
/// Only `title` is required. Everything else falls back to `None`, an empty
/// string or an empty list, whether the key is absent or explicitly `null`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Book {
    pub title: String,

    #[serde(rename = "pagecount", default)]
    pub page_count: Option<u32>,

    #[serde(rename = "publisheddate", default, deserialize_with = "published_date")]
    pub published_date: Option<NaiveDate>,

    #[serde(rename = "thumbnailurl", default, deserialize_with = "null_as_default")]
    pub thumbnail_url: String,

    #[serde(rename = "shortdescription", default, deserialize_with = "null_as_default")]
    pub short_description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
}

impl Book {
    /// Creates a Book with only a title; the rest is filled in with the builder methods.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            page_count: None,
            published_date: None,
            thumbnail_url: String::new(),
            short_description: String::new(),
            status: String::new(),
            authors: Vec::new(),
            categories: Vec::new(),
        }
    }

    pub fn with_pages(mut self, pages: u32) -> Self {
        self.page_count = Some(pages);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.published_date = Some(date);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    /// Year of publication, if the book is dated.
    pub fn year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.published_date.map(|date| date.year())
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// True when the page count is known and falls inside `[lo, hi]`.
    pub fn pages_between(&self, lo: u32, hi: u32) -> bool {
        matches!(self.page_count, Some(pages) if pages >= lo && pages <= hi)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pages = self.page_count.map(|p| p.to_string()).unwrap_or_default();
        let date = self
            .published_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        write!(f, "{:<60} {:>15} {:>15}", self.title, pages, date)
    }
}

/// Lightweight projection of a [`Book`] carrying only title and page count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookSummary {
    pub title: String,
    pub page_count: Option<u32>,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            page_count: book.page_count,
        }
    }
}

impl fmt::Display for BookSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pages = self.page_count.map(|p| p.to_string()).unwrap_or_default();
        write!(f, "{:<60} {:>15} {:>15}", self.title, pages, "")
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// Dumps exported from document stores wrap the timestamp as `{"$date": "..."}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Wrapped {
        #[serde(rename = "$date")]
        date: String,
    },
}

fn published_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawDate>::deserialize(deserializer)?;
    let text = match raw {
        None => return Ok(None),
        Some(RawDate::Text(text)) => text,
        Some(RawDate::Wrapped { date }) => date,
    };
    parse_published_date(&text)
        .map(Some)
        .map_err(serde::de::Error::custom)
}

/// Parses the date formats found in book dumps and keeps the calendar date as written.
///
/// Accepts RFC 3339, timestamps with a `+hhmm` offset, naive timestamps and plain dates.
pub fn parse_published_date(text: &str) -> Result<NaiveDate, chrono::ParseError> {
    let text = text.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Ok(stamp.date_naive());
    }
    if let Ok(stamp) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Ok(stamp.date_naive());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(stamp.date());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_published_date_formats() {
        assert_eq!(parse_published_date("2009-04-01T00:00:00.000-0700").unwrap(), date(2009, 4, 1));
        assert_eq!(parse_published_date("2011-06-15T23:30:00+02:00").unwrap(), date(2011, 6, 15));
        assert_eq!(parse_published_date("2014-10-03T00:00:00").unwrap(), date(2014, 10, 3));
        assert_eq!(parse_published_date("2016-01-20").unwrap(), date(2016, 1, 20));
        assert!(parse_published_date("last tuesday").is_err());
    }

    #[test]
    fn test_book_row_is_fixed_width() {
        let book = Book::new("Rust in Action").with_pages(456).with_date(date(2021, 8, 10));
        let row = book.to_string();
        assert_eq!(row.len(), 60 + 1 + 15 + 1 + 15);
        assert!(row.starts_with("Rust in Action "));
        assert!(row.ends_with("     2021-08-10"));
        assert_eq!(&row[61..76], "            456");
    }

    #[test]
    fn test_book_row_leaves_unknown_columns_blank() {
        let row = Book::new("Untitled draft").to_string();
        assert_eq!(row.trim_end(), "Untitled draft");
        assert_eq!(row.len(), 91);
    }

    #[test]
    fn test_summary_projection_keeps_title_and_pages() {
        let book = Book::new("Zero Copy")
            .with_pages(120)
            .with_status("PUBLISH")
            .with_authors(["A. Writer"]);
        let summary = BookSummary::from(&book);
        assert_eq!(summary.title, "Zero Copy");
        assert_eq!(summary.page_count, Some(120));
        assert_eq!(summary.to_string().trim_end(), book.to_string().trim_end());
    }

    #[test]
    fn test_pages_between_excludes_unknown_counts() {
        assert!(Book::new("a").with_pages(300).pages_between(300, 500));
        assert!(!Book::new("b").with_pages(501).pages_between(300, 500));
        assert!(!Book::new("c").pages_between(0, u32::MAX));
    }
}

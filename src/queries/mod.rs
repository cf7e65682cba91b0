//! # Query Operations
//!
//! [`Library`] owns the two in-memory collections and answers read-only
//! queries over them. Every query borrows the library immutably: results
//! either borrow the original records (`Vec<&Book>`) or project them into new
//! values ([`BookSummary`], counts, strings).
//!
//! ## Operators on display
//!
//! - **Filtering**: [`Library::custom_filter`], [`Library::books_by_category`]
//! - **Quantifiers**: [`Library::all_books_without_status`], [`Library::any_book_published_in`]
//! - **Ordering**: [`Library::books_by_category_sorted`], [`Library::books_with_more_pages_than`]
//! - **Partitioning**: [`Library::recently_published`], [`Library::third_and_fourth_over`]
//! - **Projection**: [`Library::basic_information`]
//! - **Aggregation**: counts, sums, min/max, averages and string folds
//! - **Grouping and lookup**: [`Library::books_by_year`], [`Library::title_index`], [`Library::animals_by_color`]
//! - **Joining**: [`Library::books_join`]
//!
//! Empty input never fails. Aggregates over nothing return `None`, `0` or an
//! empty string.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use indexmap::IndexMap;
use tracing::{debug, instrument};

use crate::catalog::{self, CatalogError};
use crate::model::{default_animals, group_by, Animal, Book, BookSummary, Group};

/// Default `year` for [`Library::titles_published_after`].
pub const DEFAULT_TITLES_SINCE_YEAR: i32 = 2015;
/// Default `min_year` for [`Library::books_by_year`].
pub const DEFAULT_GROUPING_MIN_YEAR: i32 = 2000;
/// Default left-side page threshold for [`Library::books_join`].
pub const DEFAULT_JOIN_MIN_PAGES: u32 = 500;
/// Default right-side publication year threshold for [`Library::books_join`].
pub const DEFAULT_JOIN_AFTER_YEAR: i32 = 2005;

const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// The books and animals every query runs against.
#[derive(Debug, Clone)]
pub struct Library {
    books: Vec<Book>,
    animals: Vec<Animal>,
}

impl Library {
    /// Loads books from `path` and pairs them with the default animals.
    ///
    /// A missing file yields an empty book list.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let books = catalog::load_books(path)?;
        Ok(Self::new(books))
    }

    pub fn new(books: Vec<Book>) -> Self {
        Self::from_parts(books, default_animals())
    }

    pub fn from_parts(books: Vec<Book>, animals: Vec<Animal>) -> Self {
        Self { books, animals }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    // ---------------------------------------------------------------------
    // Filtering and quantifiers
    // ---------------------------------------------------------------------

    /// Applies each criterion that is present.
    ///
    /// # Arguments
    /// * `page_count` - keep books with strictly more pages
    /// * `year` - keep books published strictly after this year
    /// * `title` - keep books whose title contains this text; empty text is ignored
    #[instrument(skip(self))]
    pub fn custom_filter(
        &self,
        page_count: Option<u32>,
        year: Option<i32>,
        title: Option<&str>,
    ) -> Vec<&Book> {
        let title = title.filter(|t| !t.is_empty());
        let books: Vec<&Book> = self
            .books
            .iter()
            .filter(|book| page_count.map_or(true, |min| more_pages(book, min)))
            .filter(|book| year.map_or(true, |y| published_after(book, y)))
            .filter(|book| title.map_or(true, |t| book.title.contains(t)))
            .collect();
        debug!(size = books.len(), "Filtered");
        books
    }

    /// True when no book carries a status. Vacuously true for an empty library.
    pub fn all_books_without_status(&self) -> bool {
        self.books.iter().all(|book| book.status.is_empty())
    }

    /// True when at least one dated book was published in `year`.
    pub fn any_book_published_in(&self, year: i32) -> bool {
        self.books.iter().any(|book| book.year() == Some(year))
    }

    pub fn books_by_category(&self, category: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| book.has_category(category))
            .collect()
    }

    // ---------------------------------------------------------------------
    // Ordering and partitioning
    // ---------------------------------------------------------------------

    /// Books in `category`, ordered by title. Equal titles keep their original order.
    pub fn books_by_category_sorted(&self, category: &str) -> Vec<&Book> {
        let mut books = self.books_by_category(category);
        books.sort_by(|a, b| a.title.cmp(&b.title));
        books
    }

    /// Books with strictly more than `page_count` pages, largest first.
    pub fn books_with_more_pages_than(&self, page_count: u32) -> Vec<&Book> {
        let mut books: Vec<&Book> = self
            .books
            .iter()
            .filter(|book| more_pages(book, page_count))
            .collect();
        books.sort_by_key(|book| Reverse(book.page_count));
        books
    }

    /// The `count` most recent books in `category`. Undated books sort last.
    #[instrument(skip(self))]
    pub fn recently_published(&self, count: usize, category: &str) -> Vec<&Book> {
        let mut books = self.books_by_category(category);
        books.sort_by_key(|book| Reverse(book.published_date));
        books.truncate(count);
        debug!(size = books.len(), "Selected recent books");
        books
    }

    /// Third and fourth of the books with more than `page_count` pages.
    ///
    /// Takes the first four matches, then skips two of them.
    pub fn third_and_fourth_over(&self, page_count: u32) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| more_pages(book, page_count))
            .take(4)
            .skip(2)
            .collect()
    }

    // ---------------------------------------------------------------------
    // Projection
    // ---------------------------------------------------------------------

    /// Title and page count of the first `count` books.
    pub fn basic_information(&self, count: usize) -> Vec<BookSummary> {
        self.books.iter().take(count).map(BookSummary::from).collect()
    }

    // ---------------------------------------------------------------------
    // Aggregation
    // ---------------------------------------------------------------------

    /// Number of books with a known page count in `[lo, hi]`.
    pub fn count_books_between_pages(&self, lo: u32, hi: u32) -> usize {
        self.books
            .iter()
            .filter(|book| book.pages_between(lo, hi))
            .count()
    }

    pub fn min_published_date(&self) -> Option<NaiveDate> {
        self.books.iter().filter_map(|book| book.published_date).min()
    }

    pub fn max_page_count(&self) -> Option<u32> {
        self.books.iter().filter_map(|book| book.page_count).max()
    }

    /// The first book with the fewest pages, ignoring books with no or zero pages.
    pub fn book_with_fewest_pages(&self) -> Option<&Book> {
        self.books
            .iter()
            .filter(|book| more_pages(book, 0))
            .min_by_key(|book| book.page_count)
    }

    /// The first book carrying the latest publication date.
    pub fn most_recently_published(&self) -> Option<&Book> {
        // max_by_key keeps the last maximum; ties must resolve to the first.
        self.books
            .iter()
            .filter(|book| book.published_date.is_some())
            .reduce(|best, book| {
                if book.published_date > best.published_date {
                    book
                } else {
                    best
                }
            })
    }

    /// Total pages of the books with a page count in `[lo, hi]`.
    pub fn sum_pages_between(&self, lo: u32, hi: u32) -> u64 {
        self.books
            .iter()
            .filter(|book| book.pages_between(lo, hi))
            .filter_map(|book| book.page_count)
            .map(u64::from)
            .sum()
    }

    /// Titles of books published after `year`, joined with `" - "`.
    pub fn titles_published_after(&self, year: i32) -> String {
        self.books
            .iter()
            .filter(|book| published_after(book, year))
            .map(|book| book.title.as_str())
            .collect::<Vec<_>>()
            .join(" - ")
    }

    /// Same result as [`Library::titles_published_after`], built with an accumulator.
    pub fn titles_published_after_folded(&self, year: i32) -> String {
        self.books
            .iter()
            .filter(|book| published_after(book, year))
            .fold(String::new(), |mut acc, book| {
                if !acc.is_empty() {
                    acc.push_str(" - ");
                }
                acc.push_str(&book.title);
                acc
            })
    }

    /// Mean title length in characters.
    pub fn average_title_length(&self) -> Option<f64> {
        if self.books.is_empty() {
            return None;
        }
        let total: usize = self.books.iter().map(|book| book.title.chars().count()).sum();
        Some(total as f64 / self.books.len() as f64)
    }

    // ---------------------------------------------------------------------
    // Grouping, lookup and joining
    // ---------------------------------------------------------------------

    /// Books published in or after `min_year`, grouped by year of publication.
    #[instrument(skip(self))]
    pub fn books_by_year(&self, min_year: i32) -> Vec<Group<i32, &Book>> {
        let dated = self
            .books
            .iter()
            .filter_map(|book| book.year().filter(|y| *y >= min_year).map(|y| (y, book)));
        let groups: Vec<Group<i32, &Book>> = group_by(dated, |(year, _)| *year)
            .into_iter()
            .map(|group| Group {
                key: group.key,
                items: group.items.into_iter().map(|(_, book)| book).collect(),
            })
            .collect();
        debug!(groups = groups.len(), "Grouped by year");
        groups
    }

    /// Books keyed by the first character of their title.
    ///
    /// Keys appear in first-seen order. Books with an empty title are left out.
    pub fn title_index(&self) -> IndexMap<char, Vec<&Book>> {
        let mut index: IndexMap<char, Vec<&Book>> = IndexMap::new();
        for book in &self.books {
            if let Some(initial) = book.title.chars().next() {
                index.entry(initial).or_default().push(book);
            }
        }
        index
    }

    /// Inner join on title between long books and recent books.
    ///
    /// The left side holds books with more than `min_pages` pages, the right
    /// side books published after `after_year`. Each left book is yielded once
    /// per right book sharing its title, in left-side order.
    #[instrument(skip(self))]
    pub fn books_join(&self, min_pages: u32, after_year: i32) -> Vec<&Book> {
        let mut right: HashMap<&str, usize> = HashMap::new();
        for book in self.books.iter().filter(|b| published_after(b, after_year)) {
            *right.entry(book.title.as_str()).or_default() += 1;
        }

        let joined: Vec<&Book> = self
            .books
            .iter()
            .filter(|book| more_pages(book, min_pages))
            .flat_map(|book| {
                let matches = right.get(book.title.as_str()).copied().unwrap_or(0);
                std::iter::repeat(book).take(matches)
            })
            .collect();
        debug!(size = joined.len(), "Joined");
        joined
    }

    // ---------------------------------------------------------------------
    // Animals
    // ---------------------------------------------------------------------

    /// Green animals whose name starts with an uppercase vowel, ordered by name.
    pub fn green_animals_starting_with_vowel(&self) -> Vec<&Animal> {
        let mut animals: Vec<&Animal> = self
            .animals
            .iter()
            .filter(|animal| animal.color == "Verde")
            .filter(|animal| animal.name.starts_with(VOWELS))
            .collect();
        animals.sort_by(|a, b| a.name.cmp(&b.name));
        animals
    }

    pub fn animals_by_color(&self) -> Vec<Group<&str, &Animal>> {
        group_by(&self.animals, |animal| animal.color.as_str())
    }
}

fn more_pages(book: &Book, min: u32) -> bool {
    matches!(book.page_count, Some(pages) if pages > min)
}

fn published_after(book: &Book, year: i32) -> bool {
    matches!(book.year(), Some(y) if y > year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_library_aggregates() {
        let library = Library::new(Vec::new());
        assert_eq!(library.min_published_date(), None);
        assert_eq!(library.max_page_count(), None);
        assert_eq!(library.book_with_fewest_pages(), None);
        assert_eq!(library.most_recently_published(), None);
        assert_eq!(library.sum_pages_between(0, u32::MAX), 0);
        assert_eq!(library.count_books_between_pages(0, u32::MAX), 0);
        assert_eq!(library.titles_published_after(DEFAULT_TITLES_SINCE_YEAR), "");
        assert_eq!(library.titles_published_after_folded(DEFAULT_TITLES_SINCE_YEAR), "");
        assert_eq!(library.average_title_length(), None);
        assert!(library.all_books_without_status());
        assert!(!library.any_book_published_in(2010));
        assert!(library.title_index().is_empty());
        assert!(library.books_by_year(DEFAULT_GROUPING_MIN_YEAR).is_empty());
        assert!(library.books_join(DEFAULT_JOIN_MIN_PAGES, DEFAULT_JOIN_AFTER_YEAR).is_empty());
    }

    #[test]
    fn test_most_recently_published_prefers_first_on_tie() {
        let library = Library::new(vec![
            Book::new("Older").with_date(date(2001, 1, 1)),
            Book::new("First latest").with_date(date(2012, 5, 5)),
            Book::new("Undated"),
            Book::new("Second latest").with_date(date(2012, 5, 5)),
        ]);
        assert_eq!(library.most_recently_published().unwrap().title, "First latest");
    }

    #[test]
    fn test_fewest_pages_skips_zero_and_unknown() {
        let library = Library::new(vec![
            Book::new("Zero").with_pages(0),
            Book::new("Unknown"),
            Book::new("Thin").with_pages(90),
            Book::new("Also thin").with_pages(90),
        ]);
        assert_eq!(library.book_with_fewest_pages().unwrap().title, "Thin");
    }

    #[test]
    fn test_green_vowel_animals() {
        let library = Library::new(Vec::new());
        let names: Vec<&str> = library
            .green_animals_starting_with_vowel()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["Iguana"]);
    }

    #[test]
    fn test_animals_by_color_order() {
        let library = Library::new(Vec::new());
        let groups = library.animals_by_color();
        let keys: Vec<&str> = groups.iter().map(|g| g.key).collect();
        assert_eq!(keys, vec!["Rojo", "Gris", "Negro", "Verde", "Blanco"]);
        let green: Vec<&str> = groups[3].items.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(green, vec!["Iguana", "Sapo", "Camaleon"]);
    }
}

//! Fixed-width console listings of query results.
//!
//! Rendering returns a `String`; printing is left to the caller.

use std::fmt::{Display, Write};

use crate::model::{Animal, Group};

const DOTS_BEFORE: usize = 25;
const DOTS_AFTER: usize = 24;

/// Column headings of a book listing, followed by a blank line.
pub fn book_header() -> String {
    format!("{:<60} {:>15} {:>15}\n", "Title", "N. Pages", "Published Date")
}

/// A book listing: the header, then one row per record.
///
/// Works for anything that renders as a book row, such as
/// [`Book`](crate::model::Book) or [`BookSummary`](crate::model::BookSummary).
pub fn render_books<I>(books: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = book_header();
    out.push('\n');
    push_rows(&mut out, books);
    out
}

/// An animal listing: a short header, then one row per animal.
pub fn render_animals<'a, I>(animals: I) -> String
where
    I: IntoIterator<Item = &'a Animal>,
{
    let mut out = format!("{:<20} {:>10}\n\n", "Animal", "Color");
    push_rows(&mut out, animals);
    out
}

/// One dotted banner per color, each followed by its animals.
pub fn render_color_groups(groups: &[Group<&str, &Animal>]) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(
            out,
            "{}{}{}",
            ".".repeat(DOTS_BEFORE),
            group.key,
            ".".repeat(DOTS_AFTER)
        );
        for animal in &group.items {
            let _ = writeln!(out, "{:<20} {:>10}", animal.name, animal.color);
        }
    }
    out
}

fn push_rows<I>(out: &mut String, rows: I)
where
    I: IntoIterator,
    I::Item: Display,
{
    for row in rows {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{row}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{group_by, BookSummary};

    #[test]
    fn test_book_header() {
        let header = book_header();
        assert!(header.starts_with("Title "));
        assert!(header.ends_with(" Published Date\n"));
        assert_eq!(header.trim_end_matches('\n').len(), 91);
    }

    #[test]
    fn test_render_books_lists_every_row() {
        let rows = vec![
            BookSummary { title: "One".into(), page_count: Some(1) },
            BookSummary { title: "Two".into(), page_count: None },
        ];
        let text = render_books(&rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("One "));
        assert!(lines[3].starts_with("Two "));
    }

    #[test]
    fn test_render_books_empty_is_header_only() {
        let text = render_books(Vec::<BookSummary>::new());
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_render_color_groups() {
        let animals = vec![Animal::new("Sapo", "Verde"), Animal::new("Lobo", "Gris")];
        let groups = group_by(&animals, |a| a.color.as_str());
        let text = render_color_groups(&groups);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], format!("{}Verde{}", ".".repeat(25), ".".repeat(24)));
        assert_eq!(lines[1], format!("{:<20} {:>10}", "Sapo", "Verde"));
        assert_eq!(lines[2], format!("{}Gris{}", ".".repeat(25), ".".repeat(24)));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_render_animals() {
        let animals = vec![Animal::new("Iguana", "Verde")];
        let text = render_animals(&animals);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], format!("{:<20} {:>10}", "Animal", "Color"));
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], animals[0].to_string());
    }
}

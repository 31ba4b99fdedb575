use std::fmt;
use std::sync::Arc;

use crate::author::Author;
use crate::error::{Result, TypeError};

/// A book shared between the shelf that owns it and any readers borrowing it.
pub type SharedBook = Arc<Book>;

/// An immutable book record.
///
/// The storage label is the name of the shelf the book was catalogued into.
/// It is a display label only; the owning shelf holds the book, the book
/// never points back at the shelf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    title: String,
    authors: Vec<Author>,
    edition: u32,
    year: Option<i32>,
    storage_label: Option<String>,
}

impl Book {
    /// Create a book. At least one author is required and editions start at 1.
    pub fn new(title: impl Into<String>, authors: Vec<Author>, edition: u32) -> Result<Self> {
        let title = title.into();
        if authors.is_empty() {
            return Err(TypeError::EmptyAuthors { title });
        }
        if edition == 0 {
            return Err(TypeError::InvalidEdition { title, edition });
        }
        Ok(Self {
            title,
            authors,
            edition,
            year: None,
            storage_label: None,
        })
    }

    /// Rebuild a book from already-persisted fields without validation.
    ///
    /// Partial snapshots restore books with no authors, which [`Book::new`]
    /// would reject.
    pub fn from_parts(
        title: String,
        authors: Vec<Author>,
        edition: u32,
        year: Option<i32>,
        storage_label: Option<String>,
    ) -> Self {
        Self {
            title,
            authors,
            edition,
            year,
            storage_label,
        }
    }

    /// Set the publication year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Set the storage label shown in reports.
    pub fn with_storage_label(mut self, label: impl Into<String>) -> Self {
        self.storage_label = Some(label.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn edition(&self) -> u32 {
        self.edition
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn storage_label(&self) -> Option<&str> {
        self.storage_label.as_deref()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book: {}, Authors: ", self.title)?;
        if self.authors.is_empty() {
            f.write_str("(none)")?;
        }
        for (i, author) in self.authors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{author}")?;
        }
        if let Some(year) = self.year {
            write!(f, ", Year: {year}")?;
        }
        write!(f, ", Edition: {}", self.edition)?;
        if let Some(label) = &self.storage_label {
            write!(f, ", Storage: {label}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        Book::new("Dune", vec![Author::new("Frank Herbert")], 1).unwrap()
    }

    #[test]
    fn new_rejects_empty_authors() {
        let err = Book::new("Nobody's Book", vec![], 1).unwrap_err();
        assert_eq!(
            err,
            TypeError::EmptyAuthors {
                title: "Nobody's Book".into()
            }
        );
    }

    #[test]
    fn new_rejects_edition_zero() {
        let err = Book::new("Dune", vec![Author::new("Frank Herbert")], 0).unwrap_err();
        assert!(matches!(err, TypeError::InvalidEdition { edition: 0, .. }));
    }

    #[test]
    fn display_minimal() {
        assert_eq!(
            dune().to_string(),
            "Book: Dune, Authors: Name: Frank Herbert, Edition: 1"
        );
    }

    #[test]
    fn display_full() {
        let book = Book::new(
            "Good Omens",
            vec![Author::new("Terry Pratchett"), Author::new("Neil Gaiman")],
            2,
        )
        .unwrap()
        .with_year(1990)
        .with_storage_label("Fantasy Library");
        assert_eq!(
            book.to_string(),
            "Book: Good Omens, Authors: Name: Terry Pratchett, Name: Neil Gaiman, \
             Year: 1990, Edition: 2, Storage: Fantasy Library"
        );
    }

    #[test]
    fn display_restored_without_authors() {
        let book = Book::from_parts("Dune".into(), vec![], 1, None, None);
        assert_eq!(book.to_string(), "Book: Dune, Authors: (none), Edition: 1");
    }

    #[test]
    fn accessors() {
        let book = dune().with_year(1965).with_storage_label("Sci-Fi");
        assert_eq!(book.title(), "Dune");
        assert_eq!(book.authors().len(), 1);
        assert_eq!(book.edition(), 1);
        assert_eq!(book.year(), Some(1965));
        assert_eq!(book.storage_label(), Some("Sci-Fi"));
    }
}

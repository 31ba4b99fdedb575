//! Shelves and the storage that holds them.
//!
//! These types only hold data. Name-uniqueness checks happen in
//! `libcat-catalog` before a shelf is inserted.

use std::fmt;
use std::sync::Arc;

use crate::book::{Book, SharedBook};

/// A named, ordered collection of books.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shelf {
    name: String,
    books: Vec<SharedBook>,
}

impl Shelf {
    /// Create an empty shelf.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            books: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Books on this shelf, in insertion order.
    pub fn books(&self) -> &[SharedBook] {
        &self.books
    }

    /// Number of books on this shelf.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if the shelf holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Append a book and return the shared handle now owned by the shelf.
    pub fn add_book(&mut self, book: Book) -> SharedBook {
        let shared = Arc::new(book);
        self.books.push(Arc::clone(&shared));
        shared
    }

    /// Append an already-shared book.
    pub fn add_shared(&mut self, book: SharedBook) {
        self.books.push(book);
    }

    /// Remove a specific book instance. Returns `true` if it was on the shelf.
    ///
    /// Matching is by identity: an equal but distinct copy is not removed.
    /// Readers that borrowed the book keep their reference.
    pub fn remove_book(&mut self, book: &SharedBook) -> bool {
        match self.books.iter().position(|b| Arc::ptr_eq(b, book)) {
            Some(idx) => {
                self.books.remove(idx);
                true
            }
            None => false,
        }
    }

    /// First book with the given title.
    pub fn find_book(&self, title: &str) -> Option<&SharedBook> {
        self.books.iter().find(|b| b.title() == title)
    }
}

impl fmt::Display for Shelf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} books", self.name, self.books.len())?;
        for book in &self.books {
            write!(f, "\n    - {book}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// LibraryStorage
// ---------------------------------------------------------------------------

/// Ordered collection of shelves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LibraryStorage {
    shelves: Vec<Shelf>,
}

impl LibraryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    pub fn shelves_mut(&mut self) -> &mut [Shelf] {
        &mut self.shelves
    }

    /// Number of shelves.
    pub fn len(&self) -> usize {
        self.shelves.len()
    }

    /// Returns true if there are no shelves.
    pub fn is_empty(&self) -> bool {
        self.shelves.is_empty()
    }

    /// Append a shelf without checking for a duplicate name.
    pub fn add_shelf(&mut self, shelf: Shelf) {
        self.shelves.push(shelf);
    }

    /// Remove the first shelf with the given name and return it.
    pub fn remove_shelf(&mut self, name: &str) -> Option<Shelf> {
        let idx = self.shelves.iter().position(|s| s.name() == name)?;
        Some(self.shelves.remove(idx))
    }
}

impl fmt::Display for LibraryStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shelves.is_empty() {
            return f.write_str("Book Storages: none");
        }
        f.write_str("Book Storages:")?;
        for shelf in &self.shelves {
            write!(f, "\n{shelf}")?;
        }
        Ok(())
    }
}

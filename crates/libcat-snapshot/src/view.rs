//! Persistable views of the domain model.
//!
//! A view holds exactly the fields a snapshot keeps. Fields missing from a
//! view are not written, and come back as their zero value on restore.

use std::sync::Arc;

use libcat_types::{
    Author, Book, Library, LibraryReport, LibraryStorage, Reader, SharedBook, Shelf,
};
use serde::{Deserialize, Serialize};

use crate::codec::Snapshot;
use crate::error::{SnapshotError, SnapshotResult};
use crate::kind::SnapshotKind;

// ---------------------------------------------------------------------------
// Full views (library snapshots)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorView {
    pub name: String,
    pub year: Option<i32>,
}

impl From<&Author> for AuthorView {
    fn from(author: &Author) -> Self {
        Self {
            name: author.name().to_string(),
            year: author.year(),
        }
    }
}

impl From<AuthorView> for Author {
    fn from(view: AuthorView) -> Self {
        let author = Author::new(view.name);
        match view.year {
            Some(year) => author.with_year(year),
            None => author,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookView {
    pub title: String,
    pub authors: Vec<AuthorView>,
    pub edition: u32,
    pub year: Option<i32>,
    pub storage_label: Option<String>,
}

impl From<&Book> for BookView {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title().to_string(),
            authors: book.authors().iter().map(AuthorView::from).collect(),
            edition: book.edition(),
            year: book.year(),
            storage_label: book.storage_label().map(str::to_string),
        }
    }
}

impl BookView {
    pub fn restore(self) -> Book {
        Book::from_parts(
            self.title,
            self.authors.into_iter().map(Author::from).collect(),
            self.edition,
            self.year,
            self.storage_label,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfView {
    pub name: String,
    pub books: Vec<BookView>,
}

impl From<&Shelf> for ShelfView {
    fn from(shelf: &Shelf) -> Self {
        Self {
            name: shelf.name().to_string(),
            books: shelf.books().iter().map(|b| BookView::from(&**b)).collect(),
        }
    }
}

impl ShelfView {
    pub fn restore(self) -> Shelf {
        let mut shelf = Shelf::new(self.name);
        for book in self.books {
            shelf.add_book(book.restore());
        }
        shelf
    }
}

/// A borrowed book as stored in a library snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorrowedView {
    /// The loan points at a book still on a shelf: shelf index, book index.
    Shelved { shelf: usize, book: usize },
    /// The book is on no shelf, so it is stored by value.
    Detached(BookView),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderView {
    pub name: String,
    pub registration_number: u32,
    pub borrowed: Vec<BorrowedView>,
}

/// Full view of a [`Library`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryView {
    pub name: String,
    pub shelves: Vec<ShelfView>,
    pub readers: Vec<ReaderView>,
}

/// Position of a specific book instance within the storage.
fn locate(storage: &LibraryStorage, book: &SharedBook) -> Option<(usize, usize)> {
    storage.shelves().iter().enumerate().find_map(|(s, shelf)| {
        shelf
            .books()
            .iter()
            .position(|b| Arc::ptr_eq(b, book))
            .map(|b| (s, b))
    })
}

fn project_loan(storage: &LibraryStorage, book: &SharedBook) -> BorrowedView {
    match locate(storage, book) {
        Some((shelf, book)) => BorrowedView::Shelved { shelf, book },
        None => BorrowedView::Detached(BookView::from(&**book)),
    }
}

fn resolve_loan(storage: &LibraryStorage, loan: BorrowedView) -> SnapshotResult<SharedBook> {
    match loan {
        BorrowedView::Shelved { shelf, book } => storage
            .shelves()
            .get(shelf)
            .and_then(|s| s.books().get(book))
            .map(Arc::clone)
            .ok_or_else(|| {
                SnapshotError::Format(format!("loan refers to missing book {book} on shelf {shelf}"))
            }),
        BorrowedView::Detached(view) => Ok(Arc::new(view.restore())),
    }
}

impl Snapshot for Library {
    type View = LibraryView;
    const KIND: SnapshotKind = SnapshotKind::Library;

    fn project(&self) -> LibraryView {
        let storage = self.storage();
        LibraryView {
            name: self.name().to_string(),
            shelves: storage.shelves().iter().map(ShelfView::from).collect(),
            readers: self
                .readers()
                .iter()
                .map(|reader| ReaderView {
                    name: reader.name().to_string(),
                    registration_number: reader.registration_number(),
                    borrowed: reader
                        .borrowed()
                        .iter()
                        .map(|book| project_loan(storage, book))
                        .collect(),
                })
                .collect(),
        }
    }

    fn restore(view: LibraryView) -> SnapshotResult<Self> {
        let mut storage = LibraryStorage::new();
        for shelf in view.shelves {
            storage.add_shelf(shelf.restore());
        }

        let mut readers = Vec::with_capacity(view.readers.len());
        for reader_view in view.readers {
            let mut reader = Reader::new(reader_view.name, reader_view.registration_number);
            for loan in reader_view.borrowed {
                reader.borrow_book(resolve_loan(&storage, loan)?);
            }
            readers.push(reader);
        }
        Ok(Library::with_parts(view.name, storage, readers))
    }
}

// ---------------------------------------------------------------------------
// Partial views (report, book and reader snapshots)
// ---------------------------------------------------------------------------

/// A book without its authors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetachedBookView {
    pub title: String,
    pub edition: u32,
    pub year: Option<i32>,
    pub storage_label: Option<String>,
}

impl From<&Book> for DetachedBookView {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title().to_string(),
            edition: book.edition(),
            year: book.year(),
            storage_label: book.storage_label().map(str::to_string),
        }
    }
}

impl DetachedBookView {
    /// Rebuild the book with no authors.
    pub fn restore(self) -> Book {
        Book::from_parts(self.title, Vec::new(), self.edition, self.year, self.storage_label)
    }
}

/// A reader without their registration number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetachedReaderView {
    pub name: String,
    pub borrowed: Vec<DetachedBookView>,
}

/// A report keeps only its summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportView {
    pub summary: String,
}

impl Snapshot for Book {
    type View = DetachedBookView;
    const KIND: SnapshotKind = SnapshotKind::Book;

    fn project(&self) -> DetachedBookView {
        DetachedBookView::from(self)
    }

    fn restore(view: DetachedBookView) -> SnapshotResult<Self> {
        Ok(view.restore())
    }
}

impl Snapshot for Reader {
    type View = DetachedReaderView;
    const KIND: SnapshotKind = SnapshotKind::Reader;

    fn project(&self) -> DetachedReaderView {
        DetachedReaderView {
            name: self.name().to_string(),
            borrowed: self
                .borrowed()
                .iter()
                .map(|b| DetachedBookView::from(&**b))
                .collect(),
        }
    }

    fn restore(view: DetachedReaderView) -> SnapshotResult<Self> {
        let mut reader = Reader::new(view.name, 0);
        for book in view.borrowed {
            reader.borrow_book(Arc::new(book.restore()));
        }
        Ok(reader)
    }
}

impl Snapshot for LibraryReport {
    type View = ReportView;
    const KIND: SnapshotKind = SnapshotKind::Report;

    fn project(&self) -> ReportView {
        ReportView {
            summary: self.summary().to_string(),
        }
    }

    fn restore(view: ReportView) -> SnapshotResult<Self> {
        Ok(LibraryReport::new(view.summary, LibraryStorage::new(), Vec::new()))
    }
}

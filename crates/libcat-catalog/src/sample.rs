//! The sample catalog the console programs start from.

use std::sync::Arc;

use libcat_types::{Author, Book, Library, LibraryReport, LibraryStorage, Reader, Shelf};

use crate::error::Result;

/// Shelf name, then (title, author first name, author last name, year, edition).
type ShelfSeed = (&'static str, &'static [(&'static str, &'static str, &'static str, i32, u32)]);

const LIBRARY_SHELVES: &[ShelfSeed] = &[
    (
        "Programming Books",
        &[
            ("Java Programming", "John", "Doe", 2022, 1),
            ("Data Structures", "Jane", "Smith", 2020, 2),
        ],
    ),
    (
        "Adventure Books",
        &[
            ("The Hobbit", "J.R.R.", "Tolkien", 1937, 1),
            ("Treasure Island", "Robert Louis", "Stevenson", 1883, 1),
        ],
    ),
    (
        "Mystery Novels",
        &[
            ("The Hound of the Baskervilles", "Arthur Conan", "Doyle", 1902, 1),
            ("Gone Girl", "Gillian", "Flynn", 2012, 1),
        ],
    ),
    (
        "Fantasy Library",
        &[
            ("Harry Potter and the Philosopher's Stone", "J.K.", "Rowling", 1997, 1),
            ("The Name of the Wind", "Patrick", "Rothfuss", 2007, 1),
        ],
    ),
    (
        "Science Fiction Collection",
        &[
            ("Dune", "Frank", "Herbert", 1965, 1),
            ("Neuromancer", "William", "Gibson", 1984, 1),
        ],
    ),
];

/// The reader every sample catalog starts with, and the book they hold.
const SAMPLE_READER: (&str, u32) = ("Alice Johnson", 12345);
const SAMPLE_LOAN: (&str, &str) = ("Programming Books", "Java Programming");

/// Build the sample library: five themed shelves and one reader who has
/// borrowed "Java Programming".
///
/// Books carry their publication year and no storage label.
pub fn sample_library(name: &str) -> Result<Library> {
    let mut storage = LibraryStorage::new();
    for (shelf_name, books) in LIBRARY_SHELVES {
        let mut shelf = Shelf::new(*shelf_name);
        for (title, first, last, year, edition) in *books {
            let book = Book::new(*title, vec![Author::from_parts(first, last)], *edition)?.with_year(*year);
            shelf.add_book(book);
        }
        storage.add_shelf(shelf);
    }
    let readers = vec![sample_reader(&storage)];
    Ok(Library::with_parts(name, storage, readers))
}

/// Build the sample report over four of the sample shelves.
///
/// In the report catalog the year belongs to the author rather than the book.
pub fn sample_report(summary: &str) -> Result<LibraryReport> {
    let mut storage = LibraryStorage::new();
    for (shelf_name, books) in LIBRARY_SHELVES.iter().take(4) {
        let mut shelf = Shelf::new(*shelf_name);
        for (title, first, last, year, edition) in *books {
            let author = Author::from_parts(first, last).with_year(*year);
            shelf.add_book(Book::new(*title, vec![author], *edition)?);
        }
        storage.add_shelf(shelf);
    }
    let readers = vec![sample_reader(&storage)];
    Ok(LibraryReport::new(summary, storage, readers))
}

fn sample_reader(storage: &LibraryStorage) -> Reader {
    let (name, registration_number) = SAMPLE_READER;
    let (shelf_name, title) = SAMPLE_LOAN;
    let mut reader = Reader::new(name, registration_number);
    let loan = storage
        .shelves()
        .iter()
        .filter(|s| s.name() == shelf_name)
        .find_map(|s| s.find_book(title));
    if let Some(book) = loan {
        reader.borrow_book(Arc::clone(book));
    }
    reader
}

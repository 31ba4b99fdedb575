//! Reader registration and borrowing.

use std::sync::Arc;

use libcat_types::{Library, Reader, SharedBook};
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::shelves::find_shelf_by_name;

/// Register a new reader with an empty borrowed list.
///
/// Always succeeds. Duplicate registration numbers are accepted.
pub fn add_reader(library: &mut Library, name: &str, registration_number: u32) {
    library.add_reader(Reader::new(name, registration_number));
    debug!(
        reader = name,
        registration_number,
        readers = library.readers().len(),
        "reader added"
    );
}

/// Number of registered readers.
pub fn count_readers(library: &Library) -> usize {
    library.readers().len()
}

/// Lend the first book titled `title` on `shelf_name` to the first reader
/// holding `registration_number`.
///
/// The book stays on its shelf; the reader gets a shared reference to it.
pub fn borrow_book(
    library: &mut Library,
    registration_number: u32,
    shelf_name: &str,
    title: &str,
) -> Result<SharedBook> {
    let shelf = find_shelf_by_name(library.storage(), shelf_name).ok_or_else(|| {
        CatalogError::ShelfNotFound {
            name: shelf_name.to_string(),
        }
    })?;
    let book = shelf
        .find_book(title)
        .map(Arc::clone)
        .ok_or_else(|| CatalogError::BookNotFound {
            shelf: shelf_name.to_string(),
            title: title.to_string(),
        })?;

    let reader = library
        .readers_mut()
        .iter_mut()
        .find(|r| r.registration_number() == registration_number)
        .ok_or(CatalogError::ReaderNotFound {
            registration_number,
        })?;
    reader.borrow_book(Arc::clone(&book));
    debug!(registration_number, shelf = shelf_name, title, "book borrowed");
    Ok(book)
}

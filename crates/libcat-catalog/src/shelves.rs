//! Shelf lookup and insertion.
//!
//! Shelf names are matched exactly (case-sensitive) by linear scan. The
//! first match wins, which only matters if duplicates were inserted around
//! [`add_shelf`] through [`LibraryStorage::add_shelf`] directly.

use libcat_types::{Author, Book, LibraryStorage, SharedBook, Shelf};
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};

/// Find the first shelf named `name`.
pub fn find_shelf_by_name<'a>(storage: &'a LibraryStorage, name: &str) -> Option<&'a Shelf> {
    storage.shelves().iter().find(|s| s.name() == name)
}

fn find_shelf_by_name_mut<'a>(storage: &'a mut LibraryStorage, name: &str) -> Option<&'a mut Shelf> {
    storage.shelves_mut().iter_mut().find(|s| s.name() == name)
}

/// Append a new empty shelf.
///
/// Fails with [`CatalogError::DuplicateShelf`] if the name is taken; the
/// storage is not modified in that case.
pub fn add_shelf(storage: &mut LibraryStorage, name: &str) -> Result<()> {
    if find_shelf_by_name(storage, name).is_some() {
        warn!(shelf = name, "rejected duplicate shelf");
        return Err(CatalogError::DuplicateShelf {
            name: name.to_string(),
        });
    }
    storage.add_shelf(Shelf::new(name));
    debug!(shelf = name, shelves = storage.len(), "shelf added");
    Ok(())
}

/// Catalogue a new single-author book onto the shelf named `shelf_name`.
///
/// The book is labelled with `shelf_name` for display. Fails with
/// [`CatalogError::ShelfNotFound`] if there is no such shelf, or
/// [`CatalogError::InvalidBook`] if the edition is zero. No shelf is
/// modified on failure.
pub fn add_book(
    storage: &mut LibraryStorage,
    shelf_name: &str,
    title: &str,
    author: Author,
    year: Option<i32>,
    edition: u32,
) -> Result<SharedBook> {
    let Some(shelf) = find_shelf_by_name_mut(storage, shelf_name) else {
        warn!(shelf = shelf_name, title, "rejected book for unknown shelf");
        return Err(CatalogError::ShelfNotFound {
            name: shelf_name.to_string(),
        });
    };

    let mut book = Book::new(title, vec![author], edition)?.with_storage_label(shelf_name);
    if let Some(year) = year {
        book = book.with_year(year);
    }
    let shared = shelf.add_book(book);
    debug!(shelf = shelf_name, title, books = shelf.len(), "book added");
    Ok(shared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn storage_with(names: &[&str]) -> LibraryStorage {
        let mut storage = LibraryStorage::new();
        for name in names {
            add_shelf(&mut storage, name).unwrap();
        }
        storage
    }

    fn counts(storage: &LibraryStorage) -> Vec<usize> {
        storage.shelves().iter().map(Shelf::len).collect()
    }

    #[test]
    fn find_is_exact_and_case_sensitive() {
        let storage = storage_with(&["Fantasy Library"]);
        assert!(find_shelf_by_name(&storage, "Fantasy Library").is_some());
        assert!(find_shelf_by_name(&storage, "fantasy library").is_none());
        assert!(find_shelf_by_name(&storage, "Fantasy").is_none());
    }

    #[test]
    fn find_returns_first_match() {
        let mut storage = LibraryStorage::new();
        let mut first = Shelf::new("Twin");
        first.add_book(Book::new("Only Here", vec![Author::new("X")], 1).unwrap());
        storage.add_shelf(first);
        storage.add_shelf(Shelf::new("Twin"));

        let found = find_shelf_by_name(&storage, "Twin").unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn add_shelf_rejects_duplicate() {
        let mut storage = storage_with(&["Mystery Novels"]);
        let err = add_shelf(&mut storage, "Mystery Novels").unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateShelf {
                name: "Mystery Novels".into()
            }
        );
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn add_book_labels_with_shelf_name() {
        let mut storage = storage_with(&["Fantasy Library"]);
        let book = add_book(
            &mut storage,
            "Fantasy Library",
            "Dune",
            Author::new("Frank Herbert"),
            Some(1965),
            1,
        )
        .unwrap();
        assert_eq!(book.storage_label(), Some("Fantasy Library"));
        assert_eq!(book.year(), Some(1965));

        let shelf = find_shelf_by_name(&storage, "Fantasy Library").unwrap();
        let text = shelf.to_string();
        assert!(text.contains("Dune"));
        assert!(text.contains("Frank Herbert"));
    }

    #[test]
    fn add_book_to_missing_shelf_fails() {
        let mut storage = storage_with(&["A", "B"]);
        let err = add_book(&mut storage, "C", "Dune", Author::new("Frank Herbert"), None, 1)
            .unwrap_err();
        assert!(matches!(err, CatalogError::ShelfNotFound { ref name } if name == "C"));
        assert_eq!(counts(&storage), vec![0, 0]);
    }

    #[test]
    fn add_book_with_zero_edition_fails_without_mutation() {
        let mut storage = storage_with(&["A"]);
        let err = add_book(&mut storage, "A", "Dune", Author::new("Frank Herbert"), None, 0)
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidBook(_)));
        assert_eq!(counts(&storage), vec![0]);
    }

    proptest! {
        #[test]
        fn new_shelf_is_found_empty(name in "[A-Za-z0-9 ]{1,32}") {
            let mut storage = storage_with(&["Programming Books", "Adventure Books"]);
            prop_assume!(find_shelf_by_name(&storage, &name).is_none());

            add_shelf(&mut storage, &name).unwrap();
            let shelf = find_shelf_by_name(&storage, &name).unwrap();
            prop_assert!(shelf.is_empty());
            prop_assert_eq!(storage.len(), 3);
        }

        #[test]
        fn duplicate_shelf_keeps_count(idx in 0usize..3) {
            let names = ["A", "B", "C"];
            let mut storage = storage_with(&names);
            prop_assert!(add_shelf(&mut storage, names[idx]).is_err());
            prop_assert_eq!(storage.len(), 3);
        }

        #[test]
        fn add_book_touches_only_target_shelf(
            target in 0usize..4,
            title in "[A-Za-z ]{1,20}",
            edition in 1u32..10
        ) {
            let names = ["A", "B", "C", "D"];
            let mut storage = storage_with(&names);
            add_book(&mut storage, "B", "Seed", Author::new("X"), None, 1).unwrap();
            let before = counts(&storage);

            add_book(&mut storage, names[target], &title, Author::new("Y"), None, edition).unwrap();

            let after = counts(&storage);
            for (i, (b, a)) in before.iter().zip(&after).enumerate() {
                if i == target {
                    prop_assert_eq!(*a, b + 1);
                } else {
                    prop_assert_eq!(a, b);
                }
            }
        }

        #[test]
        fn add_book_to_unknown_shelf_changes_nothing(name in "[a-z]{1,8}") {
            let mut storage = storage_with(&["Fiction", "History"]);
            let before = counts(&storage);
            prop_assert!(add_book(&mut storage, &name, "T", Author::new("X"), None, 1).is_err());
            prop_assert_eq!(counts(&storage), before);
        }
    }
}

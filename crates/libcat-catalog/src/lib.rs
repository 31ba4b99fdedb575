//! Catalog operations over the libcat domain model.
//!
//! Every operation here is a plain in-memory mutation. Validation failures
//! are returned as [`CatalogError`] values and leave the catalog untouched;
//! nothing is retried and nothing panics.
//!
//! # Modules
//!
//! - [`shelves`] — Shelf lookup and insertion, book registration
//! - [`readers`] — Reader registration, counting and borrowing
//! - [`sample`] — The sample catalog the console programs start from
//! - [`error`] — Error types for catalog operations

pub mod error;
pub mod readers;
pub mod sample;
pub mod shelves;

pub use error::{CatalogError, Result};
pub use readers::{add_reader, borrow_book, count_readers};
pub use sample::{sample_library, sample_report};
pub use shelves::{add_book, add_shelf, find_shelf_by_name};

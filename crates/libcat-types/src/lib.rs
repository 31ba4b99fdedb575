//! Domain model for the library catalog.
//!
//! This crate provides the plain data types every other libcat crate works
//! with. The types carry no persistence logic of their own; snapshot
//! encoding lives in `libcat-snapshot` and catalog mutations with validation
//! live in `libcat-catalog`.
//!
//! # Key Types
//!
//! - [`Author`] — Name and optional year, compared by value
//! - [`Book`] — Immutable book record, shared between shelves and readers
//! - [`Reader`] — Registered reader with a list of borrowed books
//! - [`Shelf`] — Named, ordered collection of owned books
//! - [`LibraryStorage`] — Ordered collection of shelves
//! - [`Library`] — Aggregate root persisted in full
//! - [`LibraryReport`] — Aggregate root persisted by summary only
//!
//! Every type implements [`std::fmt::Display`]; that rendering is the
//! catalog's report format.

pub mod author;
pub mod book;
pub mod error;
pub mod library;
pub mod reader;
pub mod shelf;

pub use author::Author;
pub use book::{Book, SharedBook};
pub use error::{Result, TypeError};
pub use library::{Library, LibraryReport};
pub use reader::Reader;
pub use shelf::{LibraryStorage, Shelf};

//! Error types for catalog operations.

use libcat_types::TypeError;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A shelf with this name already exists in the storage.
    #[error("storage with this name already exists: {name}")]
    DuplicateShelf { name: String },

    /// No shelf with this name exists in the storage.
    #[error("the specified storage does not exist: {name}")]
    ShelfNotFound { name: String },

    /// No book with this title is on the named shelf.
    #[error("book {title:?} not found on shelf {shelf}")]
    BookNotFound { shelf: String, title: String },

    /// No reader holds this registration number.
    #[error("no reader with registration number {registration_number}")]
    ReaderNotFound { registration_number: u32 },

    /// The book details were rejected by the domain model.
    #[error("invalid book: {0}")]
    InvalidBook(#[from] TypeError),
}

/// Convenience type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

use thiserror::Error;

/// Errors produced when constructing domain values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("book {title:?} must have at least one author")]
    EmptyAuthors { title: String },

    #[error("book {title:?} has invalid edition {edition}: editions start at 1")]
    InvalidEdition { title: String, edition: u32 },
}

/// Result alias for domain construction.
pub type Result<T> = std::result::Result<T, TypeError>;

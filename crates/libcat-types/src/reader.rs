use std::fmt;

use crate::book::SharedBook;

/// A registered library reader.
///
/// Registration numbers identify readers by convention only; nothing
/// prevents two readers from sharing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reader {
    name: String,
    registration_number: u32,
    borrowed: Vec<SharedBook>,
}

impl Reader {
    /// Create a reader with an empty borrowed list.
    pub fn new(name: impl Into<String>, registration_number: u32) -> Self {
        Self {
            name: name.into(),
            registration_number,
            borrowed: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registration_number(&self) -> u32 {
        self.registration_number
    }

    /// Books currently borrowed, in borrowing order.
    pub fn borrowed(&self) -> &[SharedBook] {
        &self.borrowed
    }

    /// Record a borrowed book. The book stays on its shelf.
    pub fn borrow_book(&mut self, book: SharedBook) {
        self.borrowed.push(book);
    }
}

impl fmt::Display for Reader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Registration Number: {}",
            self.name, self.registration_number
        )?;
        if self.borrowed.is_empty() {
            return f.write_str("\nBorrowed Books: none");
        }
        f.write_str("\nBorrowed Books:")?;
        for book in &self.borrowed {
            write!(f, "\n    - {book}")?;
        }
        Ok(())
    }
}

//! Aggregate roots.
//!
//! [`Library`] is the root that snapshots persist in full.
//! [`LibraryReport`] references the same kind of storage and readers for
//! display, but only its summary line survives a snapshot.

use std::fmt;

use crate::reader::Reader;
use crate::shelf::LibraryStorage;

/// A named library: its storage plus its registered readers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Library {
    name: String,
    storage: LibraryStorage,
    readers: Vec<Reader>,
}

impl Library {
    /// Create an empty library.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_parts(name, LibraryStorage::new(), Vec::new())
    }

    /// Create a library from existing storage and readers.
    pub fn with_parts(name: impl Into<String>, storage: LibraryStorage, readers: Vec<Reader>) -> Self {
        Self {
            name: name.into(),
            storage,
            readers,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn storage(&self) -> &LibraryStorage {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut LibraryStorage {
        &mut self.storage
    }

    pub fn readers(&self) -> &[Reader] {
        &self.readers
    }

    pub fn readers_mut(&mut self) -> &mut [Reader] {
        &mut self.readers
    }

    /// Append a reader. Registration numbers are not checked.
    pub fn add_reader(&mut self, reader: Reader) {
        self.readers.push(reader);
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Library: {}", self.name)?;
        writeln!(f, "{}", self.storage)?;
        f.write_str("Readers:")?;
        for reader in &self.readers {
            write!(f, "\n{reader}")?;
        }
        write!(f, "\nTotal Readers in the Library: {}", self.readers.len())
    }
}

// ---------------------------------------------------------------------------
// LibraryReport
// ---------------------------------------------------------------------------

/// A report over a library's storage and readers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LibraryReport {
    summary: String,
    storage: LibraryStorage,
    readers: Vec<Reader>,
}

impl LibraryReport {
    pub fn new(summary: impl Into<String>, storage: LibraryStorage, readers: Vec<Reader>) -> Self {
        Self {
            summary: summary.into(),
            storage,
            readers,
        }
    }

    /// The narrative line heading the report.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn storage(&self) -> &LibraryStorage {
        &self.storage
    }

    pub fn readers(&self) -> &[Reader] {
        &self.readers
    }
}

impl fmt::Display for LibraryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Library Report: {}", self.summary)?;
        writeln!(f, "{}", self.storage)?;
        f.write_str("Readers:")?;
        if self.readers.is_empty() {
            return f.write_str("\nNo readers in the library.");
        }
        for reader in &self.readers {
            write!(f, "\n{reader}")?;
        }
        write!(f, "\nTotal Readers in the Library: {}", self.readers.len())
    }
}

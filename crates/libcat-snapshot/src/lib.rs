//! Snapshot codec for the library catalog.
//!
//! A snapshot is one file holding one aggregate root. What survives is
//! decided by an explicit projection: every snapshot type has a persistable
//! view holding only the fields that are written, and restoring a view fills
//! everything else with its zero value.
//!
//! # Persistence Scope
//!
//! - [`Library`](libcat_types::Library) — everything: shelves, books,
//!   authors, readers, registration numbers and loans. Loans of shelved books
//!   are stored as shelf/book positions so sharing survives a round trip.
//! - [`LibraryReport`](libcat_types::LibraryReport) — the summary only;
//!   storage and readers restore empty.
//! - [`Book`](libcat_types::Book) — everything but the authors.
//! - [`Reader`](libcat_types::Reader) — everything but the registration
//!   number; borrowed books follow the book rule.
//!
//! # File Format
//!
//! ```text
//! [4 bytes: kind tag, see SnapshotKind]
//! [N bytes: bincode-encoded view]
//! ```
//!
//! There is no version field and no checksum. Any structural mismatch is a
//! decode failure, and a failed decode never yields a partial root.

pub mod codec;
pub mod error;
pub mod kind;
pub mod view;

pub use codec::{decode, decode_snapshot, encode, encode_snapshot, Snapshot};
pub use error::{SnapshotError, SnapshotResult};
pub use kind::SnapshotKind;
pub use view::{
    AuthorView, BookView, BorrowedView, DetachedBookView, DetachedReaderView, LibraryView,
    ReaderView, ReportView, ShelfView,
};

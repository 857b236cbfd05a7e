//! Book catalog model.
//!
//! # Responsibility
//! - Define the persisted book record and its insert-side counterpart.
//!
//! # Invariants
//! - `book_id` is store-assigned and never reused for another book.
//! - `availability` is an integer flag by convention (0/1), not enforced as
//!   a boolean by the store.

use serde::{Deserialize, Serialize};

/// Stable store-assigned identifier for a book record.
pub type BookId = i64;

/// Conventional value for a book that can be loaned out.
pub const AVAILABLE: i64 = 1;
/// Conventional value for a book currently on loan.
pub const UNAVAILABLE: i64 = 0;

/// A book record as persisted in the `books` relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Store-assigned rowid, immutable for the record lifetime.
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Loan-status flag; see [`AVAILABLE`] / [`UNAVAILABLE`].
    pub availability: i64,
}

impl Book {
    /// Returns whether this book is marked loanable by the 0/1 convention.
    pub fn is_available(&self) -> bool {
        self.availability != UNAVAILABLE
    }
}

/// Insert model for a book that has no identity yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub availability: i64,
}

impl NewBook {
    /// Creates an insert model with the default availability of new arrivals.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            availability: AVAILABLE,
        }
    }
}

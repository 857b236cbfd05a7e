//! Book catalog use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::book::{Book, BookId, NewBook};
use crate::repo::book_repo::BookRepository;
use crate::repo::RepoResult;
use log::info;

/// Use-case service wrapper for book catalog operations.
pub struct CatalogService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a book to the catalog and returns its store-assigned id.
    pub fn add_book(&self, book: &NewBook) -> RepoResult<BookId> {
        let id = self.repo.add_book(book)?;
        info!("event=book_add module=catalog status=ok book_id={}", id);
        Ok(id)
    }

    /// Sets the availability flag on one book.
    ///
    /// # Contract
    /// - A missing `book_id` is not an error: the call succeeds with a
    ///   returned count of zero (deliberate parity with the original
    ///   catalog behavior).
    pub fn set_availability(&self, id: BookId, availability: i64) -> RepoResult<usize> {
        let changed = self.repo.set_availability(id, availability)?;
        info!(
            "event=book_update module=catalog status=ok book_id={} rows={}",
            id, changed
        );
        Ok(changed)
    }

    /// Removes one book from the catalog.
    ///
    /// Same silent no-op contract as [`Self::set_availability`] when the id
    /// matches nothing.
    pub fn delete_book(&self, id: BookId) -> RepoResult<usize> {
        let changed = self.repo.delete_book(id)?;
        info!(
            "event=book_delete module=catalog status=ok book_id={} rows={}",
            id, changed
        );
        Ok(changed)
    }

    /// Lists books whose genre matches exactly (case-sensitive).
    ///
    /// An empty result is "found none", not an error.
    pub fn books_by_genre(&self, genre: &str) -> RepoResult<Vec<Book>> {
        self.repo.books_by_genre(genre)
    }

    /// Fetches one book by id.
    pub fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        self.repo.get_book(id)
    }
}

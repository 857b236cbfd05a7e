//! Book repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `books` relation.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Mutations targeting an unknown `book_id` succeed with zero rows
//!   affected; callers that care inspect the returned count.
//! - Genre filtering is an exact, case-sensitive match.

use crate::model::book::{Book, BookId, NewBook};
use crate::repo::{ensure_connection_ready, RepoResult};
use rusqlite::{params, Connection, Row};

const BOOKS_COLUMNS: &[&str] = &["book_id", "title", "author", "genre", "availability"];

const BOOK_SELECT_SQL: &str = "SELECT
    book_id,
    title,
    author,
    genre,
    availability
FROM books";

/// Repository interface for book CRUD operations.
pub trait BookRepository {
    /// Inserts a new book row and returns its store-assigned id.
    fn add_book(&self, book: &NewBook) -> RepoResult<BookId>;
    /// Sets the availability flag; returns the number of rows affected.
    fn set_availability(&self, id: BookId, availability: i64) -> RepoResult<usize>;
    /// Removes one book row; returns the number of rows affected.
    fn delete_book(&self, id: BookId) -> RepoResult<usize>;
    /// Lists books whose genre matches `genre` exactly.
    fn books_by_genre(&self, genre: &str) -> RepoResult<Vec<Book>>;
    /// Fetches one book by id, `None` when unknown.
    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>>;
}

/// SQLite-backed book repository.
pub struct SqliteBookRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "books", BOOKS_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl BookRepository for SqliteBookRepository<'_> {
    fn add_book(&self, book: &NewBook) -> RepoResult<BookId> {
        self.conn.execute(
            "INSERT INTO books (title, author, genre, availability)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                book.title.as_str(),
                book.author.as_str(),
                book.genre.as_str(),
                book.availability,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn set_availability(&self, id: BookId, availability: i64) -> RepoResult<usize> {
        // Zero affected rows is not an error; missing ids stay a silent
        // no-op to match the original catalog contract.
        let changed = self.conn.execute(
            "UPDATE books SET availability = ?1 WHERE book_id = ?2;",
            params![availability, id],
        )?;

        Ok(changed)
    }

    fn delete_book(&self, id: BookId) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM books WHERE book_id = ?1;", [id])?;

        Ok(changed)
    }

    fn books_by_genre(&self, genre: &str) -> RepoResult<Vec<Book>> {
        let mut stmt = self.conn.prepare(&format!(
            "{BOOK_SELECT_SQL}
             WHERE genre = ?1
             ORDER BY book_id ASC;"
        ))?;

        let mut rows = stmt.query([genre])?;
        let mut books = Vec::new();
        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }

        Ok(books)
    }

    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} WHERE book_id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_book_row(row)?));
        }

        Ok(None)
    }
}

fn parse_book_row(row: &Row<'_>) -> RepoResult<Book> {
    Ok(Book {
        book_id: row.get("book_id")?,
        title: row.get("title")?,
        author: row.get("author")?,
        genre: row.get("genre")?,
        availability: row.get("availability")?,
    })
}

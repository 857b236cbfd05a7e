use libris_core::db::open_db_in_memory;
use libris_core::{
    BookRepository, CatalogService, NewBook, RepoError, SqliteBookRepository, AVAILABLE,
    UNAVAILABLE,
};
use rusqlite::Connection;

#[test]
fn add_then_filter_returns_the_record_with_default_availability() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteBookRepository::try_new(&conn).unwrap());

    let id = catalog
        .add_book(&NewBook::new("Dune", "Herbert", "SciFi"))
        .unwrap();

    let books = catalog.books_by_genre("SciFi").unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].book_id, id);
    assert_eq!(books[0].title, "Dune");
    assert_eq!(books[0].author, "Herbert");
    assert_eq!(books[0].genre, "SciFi");
    assert_eq!(books[0].availability, AVAILABLE);
    assert!(books[0].is_available());
}

#[test]
fn genre_filter_is_exact_and_case_sensitive() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteBookRepository::try_new(&conn).unwrap());

    catalog
        .add_book(&NewBook::new("Dune", "Herbert", "SciFi"))
        .unwrap();

    assert!(catalog.books_by_genre("scifi").unwrap().is_empty());
    assert!(catalog.books_by_genre("Sci").unwrap().is_empty());
    assert_eq!(catalog.books_by_genre("SciFi").unwrap().len(), 1);
}

#[test]
fn filter_unknown_genre_returns_empty_not_error() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteBookRepository::try_new(&conn).unwrap());

    let books = catalog.books_by_genre("Nonexistent").unwrap();
    assert!(books.is_empty());
}

#[test]
fn set_availability_mutates_the_target_row() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteBookRepository::try_new(&conn).unwrap());

    let id = catalog
        .add_book(&NewBook::new("Dune", "Herbert", "SciFi"))
        .unwrap();

    let changed = catalog.set_availability(id, UNAVAILABLE).unwrap();
    assert_eq!(changed, 1);

    let book = catalog.get_book(id).unwrap().unwrap();
    assert_eq!(book.availability, UNAVAILABLE);
    assert!(!book.is_available());
}

#[test]
fn set_availability_on_missing_id_is_a_silent_noop() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteBookRepository::try_new(&conn).unwrap());

    catalog
        .add_book(&NewBook::new("Dune", "Herbert", "SciFi"))
        .unwrap();

    let changed = catalog.set_availability(9999, UNAVAILABLE).unwrap();
    assert_eq!(changed, 0);

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM books;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn delete_removes_exactly_the_target_row() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteBookRepository::try_new(&conn).unwrap());

    let doomed = catalog
        .add_book(&NewBook::new("Dune", "Herbert", "SciFi"))
        .unwrap();
    let kept = catalog
        .add_book(&NewBook::new("Hyperion", "Simmons", "SciFi"))
        .unwrap();

    let changed = catalog.delete_book(doomed).unwrap();
    assert_eq!(changed, 1);

    let remaining = catalog.books_by_genre("SciFi").unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].book_id, kept);
    assert!(catalog.get_book(doomed).unwrap().is_none());
}

#[test]
fn delete_on_missing_id_is_a_silent_noop() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteBookRepository::try_new(&conn).unwrap());

    let changed = catalog.delete_book(9999).unwrap();
    assert_eq!(changed, 0);
}

#[test]
fn availability_accepts_any_integer_flag() {
    // The store does not enforce a boolean; odd values pass through intact.
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();

    let mut book = NewBook::new("Dune", "Herbert", "SciFi");
    book.availability = 7;
    let id = repo.add_book(&book).unwrap();

    let loaded = repo.get_book(id).unwrap().unwrap();
    assert_eq!(loaded.availability, 7);
    assert!(loaded.is_available());
}

#[test]
fn book_ids_are_unique_and_monotonic() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();

    let first = repo.add_book(&NewBook::new("A", "X", "G")).unwrap();
    let second = repo.add_book(&NewBook::new("B", "Y", "G")).unwrap();
    assert!(second > first);
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteBookRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::UninitializedConnection {
            actual_version: 0,
            ..
        })
    ));
}

#[test]
fn repository_rejects_connection_without_required_books_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("PRAGMA user_version = 1;").unwrap();

    let result = SqliteBookRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("books"))
    ));
}

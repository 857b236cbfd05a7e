//! Interactive catalog console.
//!
//! # Responsibility
//! - Drive `libris_core` services through a numbered text menu.
//! - Own all line-input concerns, including malformed numeric ids.
//!
//! # Invariants
//! - Service errors are reported and the loop continues; only menu choice
//!   `0` (or end of input) terminates the process.
//! - The store connection is opened once at startup and released on exit.

use libris_core::db::open_db;
use libris_core::{
    AccountService, AuthError, Book, BookId, CatalogService, NewBook, SqliteBookRepository,
    SqliteUserRepository,
};
use std::error::Error;
use std::io::{self, BufRead, Write};

const DB_FILE: &str = "library.db";

fn main() {
    if let Err(err) = run() {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let log_dir = std::env::temp_dir().join("libris-logs");
    if let Err(err) =
        libris_core::init_logging(libris_core::default_log_level(), &log_dir.to_string_lossy())
    {
        // The console stays usable without a log file.
        eprintln!("warning: logging disabled: {err}");
    }

    let conn = open_db(DB_FILE)?;
    let accounts = AccountService::new(SqliteUserRepository::try_new(&conn)?);
    let catalog = CatalogService::new(SqliteBookRepository::try_new(&conn)?);

    log::info!("event=cli_start module=cli status=ok db_file={DB_FILE}");
    println!("Libris catalog manager v{}", libris_core::core_version());

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let Some(choice) = prompt(&mut input, "Select an action: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => register(&mut input, &accounts)?,
            "2" => login(&mut input, &accounts)?,
            "3" => add_book(&mut input, &catalog)?,
            "4" => filter_books(&mut input, &catalog)?,
            "5" => update_availability(&mut input, &catalog)?,
            "6" => delete_book(&mut input, &catalog)?,
            "0" => {
                println!("Goodbye");
                break;
            }
            _ => println!("Unknown choice, try again"),
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("--- Menu ---");
    println!("1. Register");
    println!("2. Log in");
    println!("3. Add a book");
    println!("4. Filter books by genre");
    println!("5. Update book availability");
    println!("6. Delete a book");
    println!("0. Exit");
}

fn register(
    input: &mut impl BufRead,
    accounts: &AccountService<SqliteUserRepository<'_>>,
) -> Result<(), Box<dyn Error>> {
    let Some(username) = prompt(input, "Username: ")? else {
        return Ok(());
    };
    let Some(password) = prompt(input, "Password: ")? else {
        return Ok(());
    };

    match accounts.register(&username, &password) {
        Ok(_) => println!("Registration successful"),
        Err(AuthError::DuplicateUsername(name)) => {
            println!("A user named \"{name}\" already exists")
        }
        Err(err) => println!("Registration failed: {err}"),
    }
    Ok(())
}

fn login(
    input: &mut impl BufRead,
    accounts: &AccountService<SqliteUserRepository<'_>>,
) -> Result<(), Box<dyn Error>> {
    let Some(username) = prompt(input, "Username: ")? else {
        return Ok(());
    };
    let Some(password) = prompt(input, "Password: ")? else {
        return Ok(());
    };

    match accounts.authenticate(&username, &password) {
        Ok(user) => println!("Welcome, {}", user.username),
        Err(AuthError::InvalidCredentials) => println!("Invalid username or password"),
        Err(err) => println!("Login failed: {err}"),
    }
    Ok(())
}

fn add_book(
    input: &mut impl BufRead,
    catalog: &CatalogService<SqliteBookRepository<'_>>,
) -> Result<(), Box<dyn Error>> {
    let Some(title) = prompt(input, "Title: ")? else {
        return Ok(());
    };
    let Some(author) = prompt(input, "Author: ")? else {
        return Ok(());
    };
    let Some(genre) = prompt(input, "Genre: ")? else {
        return Ok(());
    };

    match catalog.add_book(&NewBook::new(title, author, genre)) {
        Ok(id) => println!("Book added with id {id}"),
        Err(err) => println!("Failed to add book: {err}"),
    }
    Ok(())
}

fn filter_books(
    input: &mut impl BufRead,
    catalog: &CatalogService<SqliteBookRepository<'_>>,
) -> Result<(), Box<dyn Error>> {
    let Some(genre) = prompt(input, "Genre: ")? else {
        return Ok(());
    };

    match catalog.books_by_genre(&genre) {
        Ok(books) if books.is_empty() => println!("No books found for that genre"),
        Ok(books) => {
            println!("Matching books:");
            for book in &books {
                print_book(book);
            }
        }
        Err(err) => println!("Failed to filter books: {err}"),
    }
    Ok(())
}

fn update_availability(
    input: &mut impl BufRead,
    catalog: &CatalogService<SqliteBookRepository<'_>>,
) -> Result<(), Box<dyn Error>> {
    let Some(id) = prompt_number(input, "Book id: ")? else {
        return Ok(());
    };
    let Some(availability) = prompt_number(input, "New availability (1 available, 0 not): ")?
    else {
        return Ok(());
    };

    match catalog.set_availability(id, availability) {
        Ok(_) => println!("Book information updated"),
        Err(err) => println!("Failed to update book: {err}"),
    }
    Ok(())
}

fn delete_book(
    input: &mut impl BufRead,
    catalog: &CatalogService<SqliteBookRepository<'_>>,
) -> Result<(), Box<dyn Error>> {
    let Some(id) = prompt_number(input, "Book id: ")? else {
        return Ok(());
    };

    match catalog.delete_book(id) {
        Ok(_) => println!("Book deleted"),
        Err(err) => println!("Failed to delete book: {err}"),
    }
    Ok(())
}

fn print_book(book: &Book) {
    let status = if book.is_available() {
        "available"
    } else {
        "on loan"
    };
    println!(
        "  #{} \"{}\" by {} [{}] ({status})",
        book.book_id, book.title, book.author, book.genre
    );
}

/// Prints a label and reads one trimmed line. `None` means end of input.
fn prompt(input: &mut impl BufRead, label: &str) -> Result<Option<String>, Box<dyn Error>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Reads a whole number, re-prompting on malformed input.
fn prompt_number(input: &mut impl BufRead, label: &str) -> Result<Option<BookId>, Box<dyn Error>> {
    loop {
        let Some(line) = prompt(input, label)? else {
            return Ok(None);
        };
        match line.parse::<i64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Please enter a whole number"),
        }
    }
}

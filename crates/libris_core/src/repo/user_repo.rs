//! User account repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist and look up account rows in the `users` relation.
//! - Translate the unique-username constraint into a semantic error.
//!
//! # Invariants
//! - `users.username` uniqueness is enforced by the store; a violated
//!   insert leaves no partial row behind.
//! - Credential *verification* never happens here; repositories hand the
//!   stored digest to the service layer untouched.

use crate::model::user::{User, UserId};
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, ErrorCode};

const USERS_COLUMNS: &[&str] = &["user_id", "username", "password_hash"];

/// Repository interface for account persistence.
pub trait UserRepository {
    /// Inserts a new account row and returns its store-assigned id.
    ///
    /// Fails with [`RepoError::DuplicateUsername`] when the username is
    /// already taken.
    fn insert_user(&self, username: &str, password_hash: &str) -> RepoResult<UserId>;
    /// Fetches one account by exact username, `None` when unknown.
    fn find_user(&self, username: &str) -> RepoResult<Option<User>>;
}

/// SQLite-backed account repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "users", USERS_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn insert_user(&self, username: &str, password_hash: &str) -> RepoResult<UserId> {
        let inserted = self.conn.execute(
            "INSERT INTO users (username, password_hash) VALUES (?1, ?2);",
            params![username, password_hash],
        );

        match inserted {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Err(RepoError::DuplicateUsername(username.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn find_user(&self, username: &str) -> RepoResult<Option<User>> {
        let mut stmt = self.conn.prepare(
            "SELECT user_id, username, password_hash
             FROM users
             WHERE username = ?1;",
        )?;

        let mut rows = stmt.query([username])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(User {
                user_id: row.get("user_id")?,
                username: row.get("username")?,
                password_hash: row.get("password_hash")?,
            }));
        }

        Ok(None)
    }
}

//! User account model.
//!
//! # Invariants
//! - `username` is globally unique, case-sensitive as stored.
//! - `password_hash` holds a hex-encoded SHA-256 digest, never plaintext.

use serde::{Deserialize, Serialize};

/// Stable store-assigned identifier for a user account.
pub type UserId = i64;

/// A registered account as persisted in the `users` relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned rowid, immutable for the account lifetime.
    pub user_id: UserId,
    pub username: String,
    /// Hex-encoded SHA-256 digest of the plaintext password.
    pub password_hash: String,
}

//! Account registration and authentication service.
//!
//! # Responsibility
//! - Own the password hashing scheme; repositories only ever see digests.
//! - Turn repository outcomes into the account error taxonomy.
//!
//! # Invariants
//! - Unknown username and wrong password are indistinguishable to callers;
//!   both yield `InvalidCredentials`.
//! - Digest comparison is constant-time.
//! - Hashing is unsalted SHA-256 for parity with existing stored rows; the
//!   scheme lives only in `hash_password` so it can be swapped in one place.

use crate::model::user::{User, UserId};
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoError;
use log::{info, warn};
use sha2::{Digest, Sha256};
use std::error::Error;
use std::fmt::{Display, Formatter};
use subtle::ConstantTimeEq;

pub type AuthResult<T> = Result<T, AuthError>;

/// Account-facing error taxonomy.
#[derive(Debug)]
pub enum AuthError {
    /// Registration attempted with a username that already exists.
    DuplicateUsername(String),
    /// Credential pair matched no account. Intentionally covers both
    /// unknown username and wrong password.
    InvalidCredentials,
    /// Underlying storage failure.
    Storage(RepoError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateUsername(name) => write!(f, "username already taken: {name}"),
            Self::InvalidCredentials => write!(f, "invalid username or password"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for AuthError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::DuplicateUsername(name) => Self::DuplicateUsername(name),
            other => Self::Storage(other),
        }
    }
}

/// Use-case service for the user registry.
pub struct AccountService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> AccountService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new account, hashing the plaintext before persistence.
    ///
    /// # Contract
    /// - Returns the store-assigned account id on success.
    /// - Fails with [`AuthError::DuplicateUsername`] when the name is taken;
    ///   the store leaves no partial row behind.
    pub fn register(&self, username: &str, password: &str) -> AuthResult<UserId> {
        let digest = hash_password(password);
        let user_id = self.repo.insert_user(username, &digest).map_err(|err| {
            warn!(
                "event=register module=account status=error username={} error={}",
                username, err
            );
            AuthError::from(err)
        })?;

        info!(
            "event=register module=account status=ok user_id={}",
            user_id
        );
        Ok(user_id)
    }

    /// Verifies a credential pair against the stored digest.
    ///
    /// # Contract
    /// - Returns the matched account identity on success.
    /// - Unknown username and wrong password both fail with
    ///   [`AuthError::InvalidCredentials`].
    pub fn authenticate(&self, username: &str, password: &str) -> AuthResult<User> {
        let user = self
            .repo
            .find_user(username)?
            .ok_or(AuthError::InvalidCredentials)?;

        if !digest_matches(password, &user.password_hash) {
            warn!("event=login module=account status=denied");
            return Err(AuthError::InvalidCredentials);
        }

        info!(
            "event=login module=account status=ok user_id={}",
            user.user_id
        );
        Ok(user)
    }
}

/// Computes the hex-encoded SHA-256 digest stored for a plaintext password.
///
/// Deterministic: the same plaintext always yields the same digest.
pub fn hash_password(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hex::encode(hasher.finalize())
}

/// Constant-time comparison of a plaintext candidate against a stored
/// hex digest. Undecodable stored digests never match.
fn digest_matches(candidate: &str, stored_hex: &str) -> bool {
    let Ok(stored) = hex::decode(stored_hex) else {
        return false;
    };

    let mut hasher = Sha256::new();
    hasher.update(candidate.as_bytes());
    let computed = hasher.finalize();

    computed.as_slice().ct_eq(stored.as_slice()).into()
}

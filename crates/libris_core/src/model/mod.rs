//! Domain records for the catalog.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Identities are store-assigned rowids and immutable once created.
//! - Users and books are independent entities; no relation links them.

pub mod book;
pub mod user;

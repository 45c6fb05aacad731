//! Domain layer for the reelbase movie catalog.
//!
//! Holds the pieces that do not touch the database: identifier and
//! timestamp aliases, the error taxonomy, input validation, the sort
//! allow-list, and slug derivation. The `reelbase-db` crate builds on
//! these to implement storage.

pub mod error;
pub mod movies;
pub mod slug;
pub mod types;

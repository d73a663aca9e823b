//! Domain model for the sign-language catalogs.
//!
//! # Responsibility
//! - Define canonical record and key types used by core business logic.
//! - Keep one entry shape for food, weekday and month catalogs.
//!
//! # Invariants
//! - Every catalog record is identified by an opaque `FavoriteKey`.
//! - Records are read-only after construction.

pub mod catalog;

//! Catalog data source abstractions.
//!
//! # Responsibility
//! - Define the read-only contract the service layer consumes.
//! - Validate and hold the static catalogs in memory.
//!
//! # Invariants
//! - Repositories never mutate catalog records after construction.
//! - Construction rejects blank names and duplicate image keys.

mod builtin;
pub mod catalog_repo;

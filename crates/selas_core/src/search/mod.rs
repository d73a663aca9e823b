//! Catalog search entry points.
//!
//! # Responsibility
//! - Match free-text queries against catalog display names.
//! - Keep result ordering inside core so every UI renders the same list.

pub mod substring;

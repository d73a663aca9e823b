//! Favorites tracking shared by all catalog screens.
//!
//! One generic store keyed by an opaque key replaces per-catalog containers;
//! every catalog item exposes the same kind of key.

pub mod store;

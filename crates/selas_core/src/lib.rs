//! Core domain logic for the Selas sign-language reference app.
//! This crate is the single source of truth for catalog, search and
//! favorites behavior; UI layers only render what it returns.

pub mod config;
pub mod favorites;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use config::CoreConfig;
pub use favorites::store::{FavoritesSnapshot, FavoritesStore, FavoritesSubscription};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::catalog::{
    CatalogEntry, CatalogItem, CatalogKind, CatalogValidationError, FavoriteKey,
};
pub use repo::catalog_repo::{CatalogRepository, CatalogResult, InMemoryCatalogRepository};
pub use search::substring::{search, search_optional, SearchResult};
pub use service::catalog_service::CatalogService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose catalog browsing, search and favorites to Dart via FRB.
//! - Keep one process-wide favorites state shared by every screen.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Favorites state lives in memory and resets on process restart.

use log::warn;
use selas_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CatalogItem, CatalogKind, CatalogService, InMemoryCatalogRepository,
};
use std::sync::OnceLock;

static CATALOG_SERVICE: OnceLock<Result<CatalogService<InMemoryCatalogRepository>, String>> =
    OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One gesture card as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogCard {
    /// Catalog label (`food|weekday|month`), used to pick the card widget.
    pub kind: String,
    /// Display name shown on the card.
    pub display_name: String,
    /// Image key; also the favorite key.
    pub image_key: i64,
    /// Favorite state at response time.
    pub is_favorite: bool,
}

/// List response envelope shared by catalog, search and favorites screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogListResponse {
    pub items: Vec<CatalogCard>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

impl CatalogListResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            message: message.into(),
        }
    }
}

/// Lists one catalog (`food|weekday|month`).
///
/// # FFI contract
/// - Unknown kinds return an empty list with a diagnostic message.
#[flutter_rust_bridge::frb(sync)]
pub fn list_catalog(kind: String) -> CatalogListResponse {
    let Some(parsed) = CatalogKind::parse(&kind) else {
        return CatalogListResponse::failure(format!(
            "list_catalog failed: unknown catalog `{}`",
            kind.trim()
        ));
    };
    with_service(|service| {
        let items = service.catalog(parsed);
        let message = format!("{} {} item(s).", items.len(), parsed);
        to_response(service, items, message)
    })
}

/// Searches all catalogs by display name.
///
/// # FFI contract
/// - `None` and `""` both return every item.
/// - Results: foods, then weekdays, then months.
#[flutter_rust_bridge::frb(sync)]
pub fn search_catalogs(query: Option<String>) -> CatalogListResponse {
    with_service(|service| {
        let items = service.search(query.as_deref().unwrap_or_default());
        let message = if items.is_empty() {
            "No results.".to_string()
        } else {
            format!("Found {} result(s).", items.len())
        };
        to_response(service, items, message)
    })
}

/// Marks an item as favorite. Returns `false` when it already was.
#[flutter_rust_bridge::frb(sync)]
pub fn add_favorite(image_key: i64) -> bool {
    service()
        .map(|service| service.add_favorite(image_key))
        .unwrap_or(false)
}

/// Unmarks an item. Returns `false` when it was not a favorite.
#[flutter_rust_bridge::frb(sync)]
pub fn remove_favorite(image_key: i64) -> bool {
    service()
        .map(|service| service.remove_favorite(image_key))
        .unwrap_or(false)
}

/// Flips favorite state and returns the new state.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_favorite(image_key: i64) -> bool {
    service()
        .map(|service| service.toggle_favorite(image_key))
        .unwrap_or(false)
}

#[flutter_rust_bridge::frb(sync)]
pub fn is_favorite(image_key: i64) -> bool {
    service()
        .map(|service| service.is_favorite(image_key))
        .unwrap_or(false)
}

/// Current favorite keys in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn favorite_keys() -> Vec<i64> {
    service()
        .map(|service| service.favorites().to_vec())
        .unwrap_or_default()
}

/// Favorites screen content: favorite keys resolved to cards.
#[flutter_rust_bridge::frb(sync)]
pub fn favorite_items() -> CatalogListResponse {
    with_service(|service| {
        let items = service.favorite_items();
        let message = if items.is_empty() {
            "No favorites yet.".to_string()
        } else {
            format!("{} favorite(s).", items.len())
        };
        to_response(service, items, message)
    })
}

fn service() -> Option<&'static CatalogService<InMemoryCatalogRepository>> {
    match CATALOG_SERVICE.get_or_init(|| {
        InMemoryCatalogRepository::builtin()
            .map(CatalogService::new)
            .map_err(|err| err.to_string())
    }) {
        Ok(service) => Some(service),
        Err(err) => {
            warn!("event=catalog_service_init module=ffi status=error error={err}");
            None
        }
    }
}

fn with_service(
    f: impl FnOnce(&CatalogService<InMemoryCatalogRepository>) -> CatalogListResponse,
) -> CatalogListResponse {
    match service() {
        Some(service) => f(service),
        None => CatalogListResponse::failure("catalog service unavailable"),
    }
}

fn to_response(
    service: &CatalogService<InMemoryCatalogRepository>,
    items: Vec<CatalogItem>,
    message: String,
) -> CatalogListResponse {
    let items = items
        .into_iter()
        .map(|item| CatalogCard {
            kind: item.kind().as_str().to_string(),
            is_favorite: service.is_favorite(item.image_key()),
            image_key: item.image_key(),
            display_name: item.entry().display_name.clone(),
        })
        .collect();
    CatalogListResponse { items, message }
}

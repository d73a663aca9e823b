//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for browsing, searching and favorites.
//! - Delegate catalog reads to a repository and state to one shared store.
//!
//! # Invariants
//! - All catalog screens share the same `FavoritesStore`.
//! - Service APIs never mutate catalog data.

use crate::favorites::store::{FavoritesSnapshot, FavoritesStore, FavoritesSubscription};
use crate::model::catalog::{CatalogItem, CatalogKind, FavoriteKey};
use crate::repo::catalog_repo::CatalogRepository;
use crate::search::substring::{search, SearchResult};
use std::sync::Arc;

/// Use-case service wrapper for catalog browsing and favorites.
pub struct CatalogService<R: CatalogRepository> {
    repo: R,
    favorites: Arc<FavoritesStore<FavoriteKey>>,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Creates a service with its own empty favorites store.
    pub fn new(repo: R) -> Self {
        Self::with_favorites(repo, Arc::new(FavoritesStore::new()))
    }

    /// Creates a service over an existing favorites store.
    pub fn with_favorites(repo: R, favorites: Arc<FavoritesStore<FavoriteKey>>) -> Self {
        Self { repo, favorites }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Returns the shared favorites store handle.
    pub fn favorites_store(&self) -> Arc<FavoritesStore<FavoriteKey>> {
        Arc::clone(&self.favorites)
    }

    /// Lists one catalog in display order.
    pub fn catalog(&self, kind: CatalogKind) -> Vec<CatalogItem> {
        self.repo.items(kind)
    }

    /// Searches all catalogs; see [`search`].
    pub fn search(&self, query: &str) -> SearchResult {
        search(
            query,
            self.repo.foods(),
            self.repo.weekdays(),
            self.repo.months(),
        )
    }

    pub fn add_favorite(&self, key: FavoriteKey) -> bool {
        self.favorites.add_favorite(key)
    }

    pub fn remove_favorite(&self, key: FavoriteKey) -> bool {
        self.favorites.remove_favorite(&key)
    }

    /// Flips favorite state and returns whether `key` is now a favorite.
    pub fn toggle_favorite(&self, key: FavoriteKey) -> bool {
        self.favorites.toggle_favorite(key)
    }

    pub fn is_favorite(&self, key: FavoriteKey) -> bool {
        self.favorites.is_favorite(&key)
    }

    pub fn favorites(&self) -> FavoritesSnapshot<FavoriteKey> {
        self.favorites.snapshot()
    }

    pub fn subscribe_favorites(&self) -> FavoritesSubscription<FavoriteKey> {
        self.favorites.subscribe()
    }

    /// Resolves the current favorites to catalog items.
    ///
    /// # Contract
    /// - Follows snapshot (insertion) order.
    /// - Keys unknown to the repository are skipped.
    pub fn favorite_items(&self) -> Vec<CatalogItem> {
        self.favorites
            .snapshot()
            .iter()
            .filter_map(|key| self.repo.find(*key))
            .collect()
    }
}

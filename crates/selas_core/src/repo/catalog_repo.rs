//! Catalog data source contracts and in-memory implementation.
//!
//! # Responsibility
//! - Expose the three read-only catalogs in their display order.
//! - Resolve favorite keys back to catalog items.
//!
//! # Invariants
//! - Catalog contents never change after construction.
//! - Image keys are unique across all three catalogs.

use crate::model::catalog::{
    CatalogEntry, CatalogItem, CatalogKind, CatalogValidationError, FavoriteKey,
};
use log::info;
use std::collections::HashMap;

pub type CatalogResult<T> = Result<T, CatalogValidationError>;

/// Read-only access to the food, weekday and month catalogs.
pub trait CatalogRepository {
    fn foods(&self) -> &[CatalogEntry];
    fn weekdays(&self) -> &[CatalogEntry];
    fn months(&self) -> &[CatalogEntry];

    /// Returns the raw entries of one catalog.
    fn entries(&self, kind: CatalogKind) -> &[CatalogEntry] {
        match kind {
            CatalogKind::Food => self.foods(),
            CatalogKind::Weekday => self.weekdays(),
            CatalogKind::Month => self.months(),
        }
    }

    /// Returns one catalog as tagged items, in catalog order.
    fn items(&self, kind: CatalogKind) -> Vec<CatalogItem> {
        self.entries(kind)
            .iter()
            .cloned()
            .map(|entry| CatalogItem::new(kind, entry))
            .collect()
    }

    /// Resolves a favorite key to its catalog item.
    ///
    /// Catalogs are scanned in Food -> Weekday -> Month order.
    fn find(&self, key: FavoriteKey) -> Option<CatalogItem> {
        CatalogKind::ALL.into_iter().find_map(|kind| {
            self.entries(kind)
                .iter()
                .find(|entry| entry.image_key == key)
                .map(|entry| CatalogItem::new(kind, entry.clone()))
        })
    }
}

/// Catalogs held in memory for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryCatalogRepository {
    foods: Vec<CatalogEntry>,
    weekdays: Vec<CatalogEntry>,
    months: Vec<CatalogEntry>,
}

impl InMemoryCatalogRepository {
    /// Builds a repository after validating the supplied catalogs.
    ///
    /// # Errors
    /// - `BlankDisplayName` when any entry has an empty/whitespace name.
    /// - `DuplicateKey` when an image key appears more than once in any
    ///   catalog or across catalogs.
    pub fn try_new(
        foods: Vec<CatalogEntry>,
        weekdays: Vec<CatalogEntry>,
        months: Vec<CatalogEntry>,
    ) -> CatalogResult<Self> {
        let repo = Self {
            foods,
            weekdays,
            months,
        };
        repo.validate()?;
        info!(
            "event=catalog_load module=repo status=ok foods={} weekdays={} months={}",
            repo.foods.len(),
            repo.weekdays.len(),
            repo.months.len()
        );
        Ok(repo)
    }

    /// Total number of entries across all catalogs.
    pub fn len(&self) -> usize {
        self.foods.len() + self.weekdays.len() + self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn validate(&self) -> CatalogResult<()> {
        let mut seen: HashMap<FavoriteKey, CatalogKind> = HashMap::new();
        for kind in CatalogKind::ALL {
            for entry in self.entries(kind) {
                if entry.display_name.trim().is_empty() {
                    return Err(CatalogValidationError::BlankDisplayName {
                        kind,
                        image_key: entry.image_key,
                    });
                }
                if let Some(first) = seen.insert(entry.image_key, kind) {
                    return Err(CatalogValidationError::DuplicateKey {
                        image_key: entry.image_key,
                        first,
                        second: kind,
                    });
                }
            }
        }
        Ok(())
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn foods(&self) -> &[CatalogEntry] {
        &self.foods
    }

    fn weekdays(&self) -> &[CatalogEntry] {
        &self.weekdays
    }

    fn months(&self) -> &[CatalogEntry] {
        &self.months
    }
}

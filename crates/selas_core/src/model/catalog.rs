//! Catalog record model.
//!
//! # Responsibility
//! - Define the immutable record shared by food/weekday/month catalogs.
//! - Provide a tagged item type so callers dispatch by exhaustive `match`.
//!
//! # Invariants
//! - `image_key` is opaque; only equality is meaningful.
//! - Records are constructed once and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque key used to track favorite membership across all catalogs.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type FavoriteKey = i64;

/// Which catalog a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    /// Meal vocabulary ("Para Pedir Cena", ...).
    Food,
    /// Days of the week.
    Weekday,
    /// Months of the year.
    Month,
}

impl CatalogKind {
    /// All kinds in search/result order.
    pub const ALL: [CatalogKind; 3] = [Self::Food, Self::Weekday, Self::Month];

    /// Stable lowercase label used by FFI and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Weekday => "weekday",
            Self::Month => "month",
        }
    }

    /// Parses a label produced by [`CatalogKind::as_str`].
    ///
    /// Input is trimmed and matched case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "food" => Some(Self::Food),
            "weekday" => Some(Self::Weekday),
            "month" => Some(Self::Month),
            _ => None,
        }
    }
}

impl Display for CatalogKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One gesture card: a display name plus the image key that identifies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Human-readable name, matched by search.
    pub display_name: String,
    /// Opaque image identifier, also used as the favorite key.
    pub image_key: FavoriteKey,
}

impl CatalogEntry {
    pub fn new(display_name: impl Into<String>, image_key: FavoriteKey) -> Self {
        Self {
            display_name: display_name.into(),
            image_key,
        }
    }
}

/// Catalog record tagged with the catalog it came from.
///
/// Serialized as a flat object with a `kind` discriminant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogItem {
    Food(CatalogEntry),
    Weekday(CatalogEntry),
    Month(CatalogEntry),
}

impl CatalogItem {
    /// Wraps an entry with the given catalog tag.
    pub fn new(kind: CatalogKind, entry: CatalogEntry) -> Self {
        match kind {
            CatalogKind::Food => Self::Food(entry),
            CatalogKind::Weekday => Self::Weekday(entry),
            CatalogKind::Month => Self::Month(entry),
        }
    }

    pub fn kind(&self) -> CatalogKind {
        match self {
            Self::Food(_) => CatalogKind::Food,
            Self::Weekday(_) => CatalogKind::Weekday,
            Self::Month(_) => CatalogKind::Month,
        }
    }

    pub fn entry(&self) -> &CatalogEntry {
        match self {
            Self::Food(entry) | Self::Weekday(entry) | Self::Month(entry) => entry,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.entry().display_name
    }

    pub fn image_key(&self) -> FavoriteKey {
        self.entry().image_key
    }
}

/// Rejection reasons for catalog data supplied at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogValidationError {
    /// A record has an empty or whitespace-only display name.
    BlankDisplayName {
        kind: CatalogKind,
        image_key: FavoriteKey,
    },
    /// The same image key appears twice; favorites could not tell them apart.
    DuplicateKey {
        image_key: FavoriteKey,
        first: CatalogKind,
        second: CatalogKind,
    },
}

impl Display for CatalogValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankDisplayName { kind, image_key } => write!(
                f,
                "{kind} entry with image_key {image_key} has a blank display_name"
            ),
            Self::DuplicateKey {
                image_key,
                first,
                second,
            } => write!(
                f,
                "image_key {image_key} is used by both a {first} entry and a {second} entry"
            ),
        }
    }
}

impl Error for CatalogValidationError {}

//! Built-in gesture catalogs shipped with the application.

use crate::model::catalog::CatalogEntry;
use crate::repo::catalog_repo::{CatalogResult, InMemoryCatalogRepository};

const FOODS: [(&str, i64); 4] = [
    ("Para Pedir Cena", 101),
    ("Para Pedir Comida", 102),
    ("Para Pedir Desayuno", 103),
    ("Para Pedir Merienda", 104),
];

const WEEKDAYS: [(&str, i64); 7] = [
    ("Lunes", 201),
    ("Martes", 202),
    ("Miércoles", 203),
    ("Jueves", 204),
    ("Viernes", 205),
    ("Sábado", 206),
    ("Domingo", 207),
];

const MONTHS: [(&str, i64); 12] = [
    ("Enero", 301),
    ("Febrero", 302),
    ("Marzo", 303),
    ("Abril", 304),
    ("Mayo", 305),
    ("Junio", 306),
    ("Julio", 307),
    ("Agosto", 308),
    ("Septiembre", 309),
    ("Octubre", 310),
    ("Noviembre", 311),
    ("Diciembre", 312),
];

impl InMemoryCatalogRepository {
    /// Loads the built-in food, weekday and month catalogs.
    pub fn builtin() -> CatalogResult<Self> {
        Self::try_new(to_entries(&FOODS), to_entries(&WEEKDAYS), to_entries(&MONTHS))
    }
}

fn to_entries(rows: &[(&str, i64)]) -> Vec<CatalogEntry> {
    rows.iter()
        .map(|(name, key)| CatalogEntry::new(*name, *key))
        .collect()
}

//! Food catalog
//!
//! Read-only lookup table of foods loaded once at startup from a
//! spreadsheet. Built explicitly and passed to whatever needs it; there is
//! no shared global catalog.

pub mod xlsx;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{FoodRecord, Nutrition};

/// Catalog error types
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    #[error("workbook contains no sheets")]
    NoSheet,

    #[error("malformed catalog row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("food {name:?} has invalid reference weight {value}")]
    InvalidReferenceWeight { name: String, value: f64 },

    #[error("unknown food: {name:?}")]
    FoodNotFound { name: String },
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// One data row of the catalog source, format-agnostic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRow {
    pub name: String,
    pub reference_weight: f64,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

/// Mapping from food name to record, preserving source row order
///
/// Duplicate names are last-write-wins: the later row's values replace the
/// earlier record, which keeps its original position (insertion-order
/// mapping semantics).
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    records: Vec<FoodRecord>,
    index: HashMap<String, usize>,
}

impl FoodCatalog {
    /// Build a catalog from source rows
    ///
    /// Rejects rows whose reference weight is not a positive finite number.
    pub fn from_rows<I>(rows: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = CatalogRow>,
    {
        let mut catalog = Self::default();

        for row in rows {
            if !row.reference_weight.is_finite() || row.reference_weight <= 0.0 {
                return Err(CatalogError::InvalidReferenceWeight {
                    name: row.name,
                    value: row.reference_weight,
                });
            }

            let record = FoodRecord {
                name: row.name,
                reference_weight: row.reference_weight,
                nutrition: Nutrition {
                    calories: row.calories,
                    protein: row.protein,
                    fat: row.fat,
                    carbs: row.carbs,
                },
            };

            match catalog.index.get(&record.name) {
                Some(&position) => {
                    tracing::warn!("duplicate food {:?}, keeping later row", record.name);
                    catalog.records[position] = record;
                }
                None => {
                    catalog.index.insert(record.name.clone(), catalog.records.len());
                    catalog.records.push(record);
                }
            }
        }

        Ok(catalog)
    }

    /// Food names in source order
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    /// Look up a food by name
    pub fn get(&self, name: &str) -> CatalogResult<&FoodRecord> {
        self.index
            .get(name)
            .map(|&position| &self.records[position])
            .ok_or_else(|| CatalogError::FoodNotFound {
                name: name.to_string(),
            })
    }

    /// Records in source order
    pub fn iter(&self) -> impl Iterator<Item = &FoodRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, reference_weight: f64, calories: f64) -> CatalogRow {
        CatalogRow {
            name: name.to_string(),
            reference_weight,
            calories,
            protein: 1.0,
            fat: 2.0,
            carbs: 3.0,
        }
    }

    #[test]
    fn test_names_in_source_order() {
        let catalog =
            FoodCatalog::from_rows(vec![row("Borscht", 250.0, 120.0), row("Apple", 100.0, 52.0)])
                .unwrap();
        assert_eq!(catalog.names(), vec!["Borscht", "Apple"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_get_known_food() {
        let catalog = FoodCatalog::from_rows(vec![row("Apple", 100.0, 52.0)]).unwrap();
        let apple = catalog.get("Apple").unwrap();
        assert_eq!(apple.reference_weight, 100.0);
        assert_eq!(apple.nutrition.calories, 52.0);
    }

    #[test]
    fn test_get_unknown_food() {
        let catalog = FoodCatalog::from_rows(vec![row("Apple", 100.0, 52.0)]).unwrap();
        let err = catalog.get("Pear").unwrap_err();
        assert!(matches!(err, CatalogError::FoodNotFound { name } if name == "Pear"));
    }

    #[test]
    fn test_duplicate_name_is_last_write_wins_keeping_position() {
        let catalog = FoodCatalog::from_rows(vec![
            row("Apple", 100.0, 52.0),
            row("Borscht", 250.0, 120.0),
            row("Apple", 150.0, 80.0),
        ])
        .unwrap();

        // Later row's values win, first row's position is kept
        assert_eq!(catalog.names(), vec!["Apple", "Borscht"]);
        let apple = catalog.get("Apple").unwrap();
        assert_eq!(apple.reference_weight, 150.0);
        assert_eq!(apple.nutrition.calories, 80.0);
    }

    #[test]
    fn test_rejects_non_positive_reference_weight() {
        let err = FoodCatalog::from_rows(vec![row("Apple", 0.0, 52.0)]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidReferenceWeight { .. }));

        let err = FoodCatalog::from_rows(vec![row("Apple", -5.0, 52.0)]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidReferenceWeight { .. }));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = FoodCatalog::from_rows(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.names().is_empty());
    }
}

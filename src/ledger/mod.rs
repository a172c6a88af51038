//! Intake ledger
//!
//! Ordered list of (food, consumed weight) entries picked by the user, with
//! derived column totals. The catalog is injected at construction; entries
//! hold non-owning references into it. Aggregates are recomputed on demand
//! with a full pass over the entries, which stay in the tens of rows.

use serde::Serialize;
use thiserror::Error;

use crate::catalog::{CatalogError, FoodCatalog};
use crate::models::{FoodRecord, NutrientColumn, Nutrition};

/// Ledger error types
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger position {position} is out of range (len {len})")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("invalid consumed weight: {value}")]
    InvalidWeight { value: f64 },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// One row of the ledger: a catalog food plus the weight consumed
#[derive(Debug, Clone)]
pub struct IntakeEntry<'a> {
    food: &'a FoodRecord,
    consumed_grams: f64,
}

impl<'a> IntakeEntry<'a> {
    pub fn food(&self) -> &'a FoodRecord {
        self.food
    }

    pub fn consumed_grams(&self) -> f64 {
        self.consumed_grams
    }

    /// Nutrient values scaled to the consumed weight
    pub fn nutrition(&self) -> Nutrition {
        self.food.scaled_for(self.consumed_grams)
    }
}

/// Ordered intake entries over an injected catalog
#[derive(Debug)]
pub struct IntakeLedger<'a> {
    catalog: &'a FoodCatalog,
    entries: Vec<IntakeEntry<'a>>,
}

impl<'a> IntakeLedger<'a> {
    pub fn new(catalog: &'a FoodCatalog) -> Self {
        Self {
            catalog,
            entries: Vec::new(),
        }
    }

    /// Append an entry for the named food, at its reference weight
    ///
    /// Returns the position of the new entry.
    pub fn add_entry(&mut self, name: &str) -> LedgerResult<usize> {
        let food = self.catalog.get(name)?;
        self.entries.push(IntakeEntry {
            food,
            consumed_grams: food.reference_weight,
        });
        Ok(self.entries.len() - 1)
    }

    /// Replace the food at `position`
    ///
    /// Resets the consumed weight to the new food's reference weight,
    /// discarding any edited value.
    pub fn set_entry_food(&mut self, position: usize, name: &str) -> LedgerResult<()> {
        let food = self.catalog.get(name)?;
        let entry = self.entry_mut(position)?;
        entry.food = food;
        entry.consumed_grams = food.reference_weight;
        Ok(())
    }

    /// Set the consumed weight at `position`
    ///
    /// Rejects negative and non-finite weights regardless of any input
    /// filtering the caller performs.
    pub fn set_entry_weight(&mut self, position: usize, grams: f64) -> LedgerResult<()> {
        if !grams.is_finite() || grams < 0.0 {
            return Err(LedgerError::InvalidWeight { value: grams });
        }
        self.entry_mut(position)?.consumed_grams = grams;
        Ok(())
    }

    /// Remove the entry at `position`; later entries shift down by one
    pub fn remove_entry(&mut self, position: usize) -> LedgerResult<IntakeEntry<'a>> {
        if position >= self.entries.len() {
            return Err(LedgerError::PositionOutOfRange {
                position,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(position))
    }

    pub fn entries(&self) -> &[IntakeEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scaled nutrient values for the entry at `position`
    pub fn entry_nutrition(&self, position: usize) -> LedgerResult<Nutrition> {
        self.entry(position).map(IntakeEntry::nutrition)
    }

    /// Sum of one nutrient column over all entries; 0 when empty
    pub fn column_total(&self, column: NutrientColumn) -> f64 {
        self.entries
            .iter()
            .map(|entry| entry.nutrition().column(column))
            .sum()
    }

    /// All column totals in a single pass
    pub fn totals(&self) -> Nutrition {
        self.entries.iter().map(IntakeEntry::nutrition).sum()
    }

    /// The legacy "per 100 g" figure: column total divided by entry count
    ///
    /// This is the arithmetic mean of the per-entry totals, not a
    /// mass-normalized per-100-gram value; the behavior is kept as the
    /// product defined it. Returns 0 for an empty ledger.
    pub fn column_total_per_100g(&self, column: NutrientColumn) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.column_total(column) / self.entries.len() as f64
    }

    /// Snapshot of rows and aggregates for rendering in one read
    pub fn summary(&self) -> LedgerSummary {
        let rows = self
            .entries
            .iter()
            .map(|entry| EntryRow {
                food: entry.food.name.clone(),
                consumed_grams: entry.consumed_grams,
                nutrition: entry.nutrition(),
            })
            .collect();

        let totals = self.totals();
        let per_100g = if self.entries.is_empty() {
            Nutrition::zero()
        } else {
            totals.scale(1.0 / self.entries.len() as f64)
        };

        LedgerSummary {
            rows,
            totals,
            per_100g,
        }
    }

    fn entry(&self, position: usize) -> LedgerResult<&IntakeEntry<'a>> {
        let len = self.entries.len();
        self.entries
            .get(position)
            .ok_or(LedgerError::PositionOutOfRange { position, len })
    }

    fn entry_mut(&mut self, position: usize) -> LedgerResult<&mut IntakeEntry<'a>> {
        let len = self.entries.len();
        self.entries
            .get_mut(position)
            .ok_or(LedgerError::PositionOutOfRange { position, len })
    }
}

/// One rendered ledger row
#[derive(Debug, Clone, Serialize)]
pub struct EntryRow {
    pub food: String,
    pub consumed_grams: f64,
    pub nutrition: Nutrition,
}

/// Serializable snapshot of the ledger for the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct LedgerSummary {
    pub rows: Vec<EntryRow>,
    pub totals: Nutrition,
    /// Legacy per-entry mean, see [`IntakeLedger::column_total_per_100g`]
    pub per_100g: Nutrition,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogRow;

    fn catalog() -> FoodCatalog {
        FoodCatalog::from_rows(vec![
            CatalogRow {
                name: "Apple".to_string(),
                reference_weight: 100.0,
                calories: 52.0,
                protein: 0.3,
                fat: 0.2,
                carbs: 14.0,
            },
            CatalogRow {
                name: "Borscht".to_string(),
                reference_weight: 250.0,
                calories: 100.0,
                protein: 4.5,
                fat: 5.0,
                carbs: 13.0,
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_ledger_totals_are_zero() {
        let catalog = catalog();
        let ledger = IntakeLedger::new(&catalog);
        for column in NutrientColumn::ALL {
            assert_eq!(ledger.column_total(column), 0.0);
            assert_eq!(ledger.column_total_per_100g(column), 0.0);
        }
        assert_eq!(ledger.totals(), Nutrition::zero());
    }

    #[test]
    fn test_add_entry_defaults_to_reference_weight() {
        let catalog = catalog();
        let mut ledger = IntakeLedger::new(&catalog);
        let position = ledger.add_entry("Borscht").unwrap();
        assert_eq!(position, 0);
        assert_eq!(ledger.entries()[0].consumed_grams(), 250.0);
        assert_eq!(ledger.entries()[0].food().name, "Borscht");
    }

    #[test]
    fn test_add_unknown_food() {
        let catalog = catalog();
        let mut ledger = IntakeLedger::new(&catalog);
        let err = ledger.add_entry("Pear").unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Catalog(CatalogError::FoodNotFound { .. })
        ));
    }

    #[test]
    fn test_scaled_column_total() {
        // Apple at 200g: 52 kcal per 100g reference -> 104 kcal
        let catalog = catalog();
        let mut ledger = IntakeLedger::new(&catalog);
        ledger.add_entry("Apple").unwrap();
        ledger.set_entry_weight(0, 200.0).unwrap();
        assert!((ledger.column_total(NutrientColumn::Calories) - 104.0).abs() < 1e-9);
        assert!((ledger.column_total(NutrientColumn::Carbs) - 28.0).abs() < 1e-9);
    }

    #[test]
    fn test_add_then_remove_restores_totals() {
        let catalog = catalog();
        let mut ledger = IntakeLedger::new(&catalog);
        ledger.add_entry("Apple").unwrap();
        let before = ledger.totals();

        let position = ledger.add_entry("Borscht").unwrap();
        ledger.remove_entry(position).unwrap();

        assert_eq!(ledger.totals(), before);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_remove_shifts_positions_down() {
        let catalog = catalog();
        let mut ledger = IntakeLedger::new(&catalog);
        ledger.add_entry("Apple").unwrap();
        ledger.add_entry("Borscht").unwrap();

        let removed = ledger.remove_entry(0).unwrap();
        assert_eq!(removed.food().name, "Apple");
        assert_eq!(ledger.entries()[0].food().name, "Borscht");
    }

    #[test]
    fn test_set_entry_food_resets_weight() {
        let catalog = catalog();
        let mut ledger = IntakeLedger::new(&catalog);
        ledger.add_entry("Apple").unwrap();
        ledger.set_entry_weight(0, 37.5).unwrap();

        ledger.set_entry_food(0, "Borscht").unwrap();
        assert_eq!(ledger.entries()[0].food().name, "Borscht");
        assert_eq!(ledger.entries()[0].consumed_grams(), 250.0);
    }

    #[test]
    fn test_set_entry_weight_rejects_bad_values() {
        let catalog = catalog();
        let mut ledger = IntakeLedger::new(&catalog);
        ledger.add_entry("Apple").unwrap();

        assert!(matches!(
            ledger.set_entry_weight(0, -1.0).unwrap_err(),
            LedgerError::InvalidWeight { .. }
        ));
        assert!(matches!(
            ledger.set_entry_weight(0, f64::NAN).unwrap_err(),
            LedgerError::InvalidWeight { .. }
        ));
        assert!(matches!(
            ledger.set_entry_weight(0, f64::INFINITY).unwrap_err(),
            LedgerError::InvalidWeight { .. }
        ));

        // Rejected values leave the entry untouched
        assert_eq!(ledger.entries()[0].consumed_grams(), 100.0);

        // Zero and fractional weights are allowed
        ledger.set_entry_weight(0, 0.0).unwrap();
        ledger.set_entry_weight(0, 12.5).unwrap();
    }

    #[test]
    fn test_position_out_of_range() {
        let catalog = catalog();
        let mut ledger = IntakeLedger::new(&catalog);

        assert!(matches!(
            ledger.set_entry_weight(0, 100.0).unwrap_err(),
            LedgerError::PositionOutOfRange { position: 0, len: 0 }
        ));
        assert!(matches!(
            ledger.set_entry_food(3, "Apple").unwrap_err(),
            LedgerError::PositionOutOfRange { position: 3, len: 0 }
        ));
        assert!(matches!(
            ledger.remove_entry(0).unwrap_err(),
            LedgerError::PositionOutOfRange { .. }
        ));
        assert!(matches!(
            ledger.entry_nutrition(0).unwrap_err(),
            LedgerError::PositionOutOfRange { .. }
        ));
    }

    #[test]
    fn test_per_100g_is_mean_over_entries() {
        // Two entries at 100 kcal each: total 200, "per 100g" 100. The
        // figure divides by entry count, not by consumed mass.
        let catalog = catalog();
        let mut ledger = IntakeLedger::new(&catalog);
        ledger.add_entry("Borscht").unwrap(); // 100 kcal at reference weight
        ledger.add_entry("Borscht").unwrap();

        assert!((ledger.column_total(NutrientColumn::Calories) - 200.0).abs() < 1e-9);
        assert!((ledger.column_total_per_100g(NutrientColumn::Calories) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_entry_nutrition() {
        let catalog = catalog();
        let mut ledger = IntakeLedger::new(&catalog);
        ledger.add_entry("Apple").unwrap();
        ledger.set_entry_weight(0, 50.0).unwrap();

        let nutrition = ledger.entry_nutrition(0).unwrap();
        assert!((nutrition.calories - 26.0).abs() < 1e-9);
        assert!((nutrition.protein - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_summary_snapshot() {
        let catalog = catalog();
        let mut ledger = IntakeLedger::new(&catalog);
        ledger.add_entry("Apple").unwrap();
        ledger.add_entry("Borscht").unwrap();

        let summary = ledger.summary();
        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].food, "Apple");
        assert_eq!(summary.rows[1].consumed_grams, 250.0);
        assert!((summary.totals.calories - 152.0).abs() < 1e-9);
        assert!((summary.per_100g.calories - 76.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary() {
        let catalog = catalog();
        let ledger = IntakeLedger::new(&catalog);
        let summary = ledger.summary();
        assert!(summary.rows.is_empty());
        assert_eq!(summary.totals, Nutrition::zero());
        assert_eq!(summary.per_100g, Nutrition::zero());
    }
}

//! Food record model
//!
//! A catalog food with nutrient values measured at a reference weight.

use serde::{Deserialize, Serialize};

use super::Nutrition;

/// A food from the catalog
///
/// `nutrition` holds the nutrient values for `reference_weight` grams of the
/// food. Records are built once at catalog load and never mutated; the
/// catalog enforces `reference_weight > 0` before constructing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub name: String,
    /// Serving size in grams at which `nutrition` is measured
    pub reference_weight: f64,
    pub nutrition: Nutrition,
}

impl FoodRecord {
    /// Nutrient values for `consumed_grams` of this food
    ///
    /// Scales linearly by `consumed_grams / reference_weight`.
    pub fn scaled_for(&self, consumed_grams: f64) -> Nutrition {
        self.nutrition.scale(consumed_grams / self.reference_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> FoodRecord {
        FoodRecord {
            name: "Apple".to_string(),
            reference_weight: 100.0,
            nutrition: Nutrition {
                calories: 52.0,
                protein: 0.3,
                fat: 0.2,
                carbs: 14.0,
            },
        }
    }

    #[test]
    fn test_scaled_for_double_weight() {
        let scaled = apple().scaled_for(200.0);
        assert!((scaled.calories - 104.0).abs() < 1e-9);
        assert!((scaled.protein - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_scaled_for_fractional_weight() {
        let scaled = apple().scaled_for(50.0);
        assert!((scaled.calories - 26.0).abs() < 1e-9);
        assert!((scaled.carbs - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_scaled_for_zero_weight() {
        let scaled = apple().scaled_for(0.0);
        assert_eq!(scaled, Nutrition::zero());
    }
}

//! Shared nutrition data structure
//!
//! Used across food records, intake entries and ledger totals.

use serde::{Deserialize, Serialize};

/// The nutrient columns tracked by the ledger, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientColumn {
    Calories,
    Protein,
    Fat,
    Carbs,
}

impl NutrientColumn {
    /// All columns in display order
    pub const ALL: [NutrientColumn; 4] = [
        NutrientColumn::Calories,
        NutrientColumn::Protein,
        NutrientColumn::Fat,
        NutrientColumn::Carbs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientColumn::Calories => "calories",
            NutrientColumn::Protein => "protein",
            NutrientColumn::Fat => "fat",
            NutrientColumn::Carbs => "carbs",
        }
    }
}

/// Nutritional information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64, // grams
    pub fat: f64,     // grams
    pub carbs: f64,   // grams
}

impl Nutrition {
    /// Create a new Nutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Value of a single nutrient column
    pub fn column(&self, column: NutrientColumn) -> f64 {
        match column {
            NutrientColumn::Calories => self.calories,
            NutrientColumn::Protein => self.protein,
            NutrientColumn::Fat => self.fat,
            NutrientColumn::Carbs => self.carbs,
        }
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            fat: self.fat * multiplier,
            carbs: self.carbs * multiplier,
        }
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            carbs: self.carbs + other.carbs,
        }
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for Nutrition {
    type Output = Nutrition;

    fn mul(self, multiplier: f64) -> Nutrition {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

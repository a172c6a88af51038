//! Data models
//!
//! Value types shared by the catalog, ledger and energy estimator.

mod food_record;
mod nutrition;
mod profile;

pub use food_record::FoodRecord;
pub use nutrition::{NutrientColumn, Nutrition};
pub use profile::{Profile, ProfileError, Sex};

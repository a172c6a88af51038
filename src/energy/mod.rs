//! Daily energy-need estimation
//!
//! Pure functions over a validated [`Profile`]. The formula is the
//! Mifflin-St Jeor resting-energy equation with the coefficients the
//! product ships: 9.99·weight + 6.25·height − 4.92·age, plus 5 for men or
//! minus 161 for women.

use crate::models::{Profile, Sex};

const WEIGHT_FACTOR: f64 = 9.99;
const HEIGHT_FACTOR: f64 = 6.25;
const AGE_FACTOR: f64 = 4.92;
const MALE_OFFSET: f64 = 5.0;
const FEMALE_OFFSET: f64 = -161.0;

/// Estimated daily caloric requirement, rounded to the nearest kcal
///
/// Range errors cannot occur here: a `Profile` only exists with all three
/// fields already validated.
pub fn estimate_daily_need(profile: &Profile) -> i64 {
    let weight = f64::from(profile.weight_kg);
    let height = f64::from(profile.height_cm);
    let age = f64::from(profile.age);

    let base = WEIGHT_FACTOR * weight + HEIGHT_FACTOR * height - AGE_FACTOR * age;
    let offset = match profile.sex {
        Sex::Male => MALE_OFFSET,
        Sex::Female => FEMALE_OFFSET,
    };

    (base + offset).round() as i64
}

/// Calories still needed to reach the daily target
///
/// Plain subtraction; a negative result means the target has been exceeded
/// and is not an error.
pub fn remaining_need(need: i64, consumed: i64) -> i64 {
    need - consumed
}

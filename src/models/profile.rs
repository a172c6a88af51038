//! Body profile model
//!
//! Validated user inputs for the daily energy-need estimate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Biological sex, selects the energy-need formula variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" => Some(Sex::Male),
            "female" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Profile validation error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("{field} is not a number: {value:?}")]
    NotNumeric { field: &'static str, value: String },

    #[error("{field} must be between 0 and {max}, got {value}", max = Profile::FIELD_MAX)]
    OutOfRange { field: &'static str, value: i64 },
}

/// A validated body profile
///
/// Age, height and weight come from bounded three-digit input fields, so each
/// must be an integer in `0..=999`. Construction fails otherwise; holding a
/// `Profile` means the estimate is computable, while an incomplete form is a
/// `ProfileError` the caller can ignore until the inputs become valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub sex: Sex,
    pub age: u16,       // years
    pub height_cm: u16, // centimeters
    pub weight_kg: u16, // kilograms
}

impl Profile {
    /// Upper bound of the three-digit input fields
    pub const FIELD_MAX: u16 = 999;

    /// Build a profile from already-numeric fields
    pub fn new(sex: Sex, age: u16, height_cm: u16, weight_kg: u16) -> Result<Self, ProfileError> {
        check_range("age", i64::from(age))?;
        check_range("height", i64::from(height_cm))?;
        check_range("weight", i64::from(weight_kg))?;
        Ok(Self {
            sex,
            age,
            height_cm,
            weight_kg,
        })
    }

    /// Build a profile from the raw text of the three numeric input fields
    pub fn parse(sex: Sex, age: &str, height_cm: &str, weight_kg: &str) -> Result<Self, ProfileError> {
        Ok(Self {
            sex,
            age: parse_field("age", age)?,
            height_cm: parse_field("height", height_cm)?,
            weight_kg: parse_field("weight", weight_kg)?,
        })
    }
}

fn check_range(field: &'static str, value: i64) -> Result<(), ProfileError> {
    if (0..=i64::from(Profile::FIELD_MAX)).contains(&value) {
        Ok(())
    } else {
        Err(ProfileError::OutOfRange { field, value })
    }
}

fn parse_field(field: &'static str, text: &str) -> Result<u16, ProfileError> {
    let value: i64 = text.trim().parse().map_err(|_| ProfileError::NotNumeric {
        field,
        value: text.to_string(),
    })?;
    check_range(field, value)?;
    Ok(value as u16)
}

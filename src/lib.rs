//! Calorie counter core
//!
//! Domain model for a single-user calorie counter: estimate a daily energy
//! target from a body profile, and tally calories and macronutrients over a
//! list of foods picked from a spreadsheet-backed catalog.

pub mod build_info;
pub mod catalog;
pub mod energy;
pub mod ledger;
pub mod models;

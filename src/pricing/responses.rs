//! Result types returned to the service layer.
//!
//! All of them serialize to JSON for the admin UI.

use rust_decimal::Decimal;
use serde::Serialize;

use super::money::MinorUnits;

/// Outcome of validating a single price record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Two records of the same fuel type and trading point with overlapping validity
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct PriceConflict {
    /// Input position of the first record; always below `index2`
    pub index1: usize,
    pub index2: usize,
    pub reason: String,
}

/// Direction of a price change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Up,
    Down,
    Same,
}

/// Difference between an old and a new price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceChange {
    pub change_amount: MinorUnits,
    #[serde(with = "rust_decimal::serde::str")]
    pub change_percent: Decimal,
    pub direction: ChangeDirection,
}

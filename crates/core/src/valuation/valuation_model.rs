//! Car valuation domain models.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_YEAR;

/// Qualitative condition tag attached to a valuation request.
///
/// Free text is normalized to a leading capital before matching; anything
/// outside the recognized set collapses to `Other`, which prices like
/// `Good`. The leniency is deliberate: an unknown tag is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    Other,
}

impl Condition {
    /// Parses a free-text condition tag.
    pub fn parse(input: &str) -> Self {
        match normalize_label(input).as_str() {
            "Excellent" => Condition::Excellent,
            "Good" => Condition::Good,
            "Fair" => Condition::Fair,
            _ => Condition::Other,
        }
    }

    /// Price multiplier for the tag. Total over the enum.
    pub fn factor(self) -> f64 {
        match self {
            Condition::Excellent => 1.1,
            Condition::Good | Condition::Other => 1.0,
            Condition::Fair => 0.85,
        }
    }
}

impl Default for Condition {
    fn default() -> Self {
        Condition::Good
    }
}

/// Normalizes a free-text label: first letter uppercased, the rest lowercased.
pub fn normalize_label(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// A fully validated valuation request.
///
/// Constructed only by the transport boundary: `make` and `model` are
/// already label-normalized, `year`/`mileage` are already coerced from
/// whatever the wire carried. The calculator never sees raw payload values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValuationRequest {
    pub make: String,
    pub model: String,
    pub year: i32,
    /// Kilometers driven. Negative input is propagated, not rejected.
    pub mileage: i64,
    pub condition: Condition,
}

impl Default for ValuationRequest {
    fn default() -> Self {
        Self {
            make: String::new(),
            model: String::new(),
            year: DEFAULT_YEAR,
            mileage: 0,
            condition: Condition::Good,
        }
    }
}

/// Result of a valuation: the estimated resale value in whole rupees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Valuation {
    pub estimated_value: i64,
}

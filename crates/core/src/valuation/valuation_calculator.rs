//! The pricing formula.

use crate::constants::{
    BASE_PRICE, DEPRECIATION_RATE, FLOOR_PRICE, MILEAGE_PENALTY_PER_STEP, MILEAGE_STEP_KM,
};
use crate::valuation::ValuationRequest;

/// Computes the estimated resale value for `request`.
///
/// `current_year` is the depreciation anchor and is passed explicitly so
/// callers control the clock. A model year in the future yields a negative
/// age and therefore a value above the base price; that behavior is kept
/// as-is rather than clamped.
///
/// The result is the raw price truncated toward zero, never below the
/// floor price. Make and model are carried on the request but do not
/// participate in the arithmetic.
pub fn estimate_value(request: &ValuationRequest, current_year: i32) -> i64 {
    let age = current_year - request.year;
    let depreciation = BASE_PRICE * DEPRECIATION_RATE * f64::from(age);
    let mileage_penalty = (request.mileage as f64 / MILEAGE_STEP_KM) * MILEAGE_PENALTY_PER_STEP;
    let raw = (BASE_PRICE - depreciation - mileage_penalty) * request.condition.factor();
    raw.max(FLOOR_PRICE) as i64
}

/// Flat base price for a standard car, in whole rupees. Not make/model dependent.
pub const BASE_PRICE: f64 = 1_200_000.0;

/// Depreciation rate per year of age
pub const DEPRECIATION_RATE: f64 = 0.12;

/// Mileage penalty charged per `MILEAGE_STEP_KM` driven
pub const MILEAGE_PENALTY_PER_STEP: f64 = 200.0;

/// Mileage step size in kilometers
pub const MILEAGE_STEP_KM: f64 = 1_000.0;

/// Minimum value the estimator ever returns
pub const FLOOR_PRICE: f64 = 50_000.0;

/// Model year assumed when a request omits one
pub const DEFAULT_YEAR: i32 = 2020;

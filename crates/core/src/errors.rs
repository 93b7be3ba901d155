//! Core error types for the car valuation service.
//!
//! The calculator itself is total and cannot fail; everything here describes
//! what can go wrong while coercing raw payload values into the typed
//! request model.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the valuation domain.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A numeric field arrived as text that does not parse as an integer.
    #[error("Field '{field}' is not a valid integer: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    /// A numeric field parsed but does not fit the expected range.
    #[error("Field '{field}' is out of range: '{value}'")]
    OutOfRange { field: &'static str, value: String },
}

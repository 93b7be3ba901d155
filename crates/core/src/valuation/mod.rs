//! Valuation module - domain models, calculator, and service.

mod valuation_calculator;
mod valuation_model;
mod valuation_service;

#[cfg(test)]
mod valuation_model_tests;

// Re-export the public interface
pub use valuation_calculator::estimate_value;
pub use valuation_model::{normalize_label, Condition, Valuation, ValuationRequest};
pub use valuation_service::{ValuationService, ValuationServiceTrait};

//! Carvalue Core - Domain entities, services, and traits.
//!
//! This crate contains the valuation logic for the car value estimator.
//! It is transport-agnostic: the HTTP adapter parses and validates incoming
//! payloads into the typed request model before anything here runs.

pub mod constants;
pub mod errors;
pub mod valuation;

// Re-export common types from the valuation module
pub use valuation::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

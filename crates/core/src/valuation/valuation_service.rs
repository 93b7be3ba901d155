//! Valuation service.
//!
//! Thin wrapper over the calculator that supplies the current calendar
//! year. The trait exists so the HTTP adapter can hold the service behind
//! `Arc<dyn ValuationServiceTrait>` and tests can substitute a fixed clock.

use chrono::{Datelike, Local};
use log::debug;

use crate::valuation::valuation_calculator::estimate_value;
use crate::valuation::valuation_model::{Valuation, ValuationRequest};

pub trait ValuationServiceTrait: Send + Sync {
    /// Estimates the resale value of `request`, anchoring depreciation on
    /// the current calendar year.
    fn estimate(&self, request: &ValuationRequest) -> Valuation;
}

#[derive(Debug, Clone, Default)]
pub struct ValuationService;

impl ValuationService {
    pub fn new() -> Self {
        Self
    }

    /// Estimates against an explicit calendar year.
    pub fn estimate_at(&self, request: &ValuationRequest, current_year: i32) -> Valuation {
        let estimated_value = estimate_value(request, current_year);
        debug!(
            "Estimated {} {} ({}, {} km, {:?}) at {}",
            request.make,
            request.model,
            request.year,
            request.mileage,
            request.condition,
            estimated_value
        );
        Valuation { estimated_value }
    }
}

impl ValuationServiceTrait for ValuationService {
    fn estimate(&self, request: &ValuationRequest) -> Valuation {
        self.estimate_at(request, Local::now().year())
    }
}

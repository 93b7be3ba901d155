use std::sync::Arc;

use carvalue_core::valuation::{ValuationService, ValuationServiceTrait};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub valuation_service: Arc<dyn ValuationServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state() -> Arc<AppState> {
    Arc::new(AppState {
        valuation_service: Arc::new(ValuationService::new()),
    })
}

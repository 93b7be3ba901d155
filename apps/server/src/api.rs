use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use carvalue_core::valuation::ValuationRequest;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    error::ApiResult,
    main_lib::AppState,
    models::{EstimateBody, EstimateResponse, NumberOrText},
};

#[utoipa::path(get, path = "/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[utoipa::path(get, path = "/readyz", responses((status = 200, description = "Ready")))]
pub async fn readyz() -> &'static str {
    "ok"
}

#[utoipa::path(
    post,
    path = "/estimate",
    request_body = EstimateBody,
    responses(
        (status = 200, body = EstimateResponse),
        (status = 400, description = "Non-numeric year or mileage"),
    )
)]
async fn estimate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<EstimateBody>,
) -> ApiResult<Json<EstimateResponse>> {
    let request = ValuationRequest::try_from(body)?;
    let valuation = state.valuation_service.estimate(&request);
    Ok(Json(valuation.into()))
}

#[derive(OpenApi)]
#[openapi(
    paths(healthz, readyz, estimate),
    components(schemas(EstimateBody, EstimateResponse, NumberOrText)),
    tags((name = "carvalue"))
)]
pub struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse().unwrap())
            .collect::<Vec<_>>();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let openapi = ApiDoc::openapi();

    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/estimate", post(estimate))
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}

pub mod cash_flow;
pub mod categories;
pub mod companies;
pub mod cost_centers;
pub mod goals;
pub mod notes;
pub mod partners;
pub mod payables;
pub mod receivables;

use std::sync::Arc;

use crate::{auth::require_jwt, config::Config, error::ApiError, main_lib::AppState};
use axum::{middleware, routing::get, Router};
use serde::Deserialize;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Month/year pair used by the listing endpoints. Both parts must come
/// together; a bare month or year is rejected before hitting the service.
#[derive(Deserialize)]
pub struct PeriodQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl PeriodQuery {
    pub fn period(&self) -> Result<Option<(i32, u32)>, ApiError> {
        match (self.year, self.month) {
            (Some(year), Some(month)) => Ok(Some((year, month))),
            (None, None) => Ok(None),
            _ => Err(ApiError::BadRequest(
                "month and year must be provided together".to_string(),
            )),
        }
    }

    pub fn required(&self) -> Result<(i32, u32), ApiError> {
        self.period()?.ok_or_else(|| {
            ApiError::BadRequest("month and year query parameters are required".to_string())
        })
    }
}

async fn healthz() -> &'static str {
    "ok"
}

async fn readyz() -> &'static str {
    "ok"
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<axum::http::HeaderValue> = config
            .cors_allow
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new().allow_origin(origins)
    };

    let protected = Router::new()
        .merge(companies::router())
        .merge(partners::router())
        .merge(categories::router())
        .merge(cost_centers::router())
        .merge(payables::router())
        .merge(receivables::router())
        .merge(cash_flow::router())
        .merge(goals::router())
        .merge(notes::router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_jwt));

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .merge(protected);

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}

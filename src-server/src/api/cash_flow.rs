use std::sync::Arc;

use crate::{
    api::PeriodQuery,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use caixa_core::cash_flow::cash_flow_model::{
    CashFlowEntry, CreateCashFlowEntry, MonthlySummary,
};

async fn list_entries(
    Query(query): Query<PeriodQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CashFlowEntry>>> {
    Ok(Json(state.cash_flow_service.get_entries(query.period()?)?))
}

async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateCashFlowEntry>,
) -> ApiResult<(StatusCode, Json<CashFlowEntry>)> {
    let entry = state.cash_flow_service.create_entry(payload).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn delete_entry(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    if state.cash_flow_service.delete_entry(&id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn monthly_summary(
    Query(query): Query<PeriodQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MonthlySummary>> {
    let (year, month) = query.required()?;
    Ok(Json(state.cash_flow_service.monthly_summary(year, month)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/cash-flow", get(list_entries).post(create_entry))
        .route("/cash-flow/summary", get(monthly_summary))
        .route("/cash-flow/{id}", axum::routing::delete(delete_entry))
}

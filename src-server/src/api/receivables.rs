use std::sync::Arc;

use crate::{
    api::payables::StatusBody,
    api::PeriodQuery,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use caixa_core::ledger::ledger_model::{
    AccountReceivable, CreateAccountReceivable, UpdateAccountReceivable,
};

async fn list_receivables(
    Query(query): Query<PeriodQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<AccountReceivable>>> {
    Ok(Json(state.ledger_service.get_receivables(query.period()?)?))
}

async fn get_receivable(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<AccountReceivable>> {
    let entry = state
        .ledger_service
        .get_receivable(&id)?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(entry))
}

async fn create_receivable(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateAccountReceivable>,
) -> ApiResult<(StatusCode, Json<AccountReceivable>)> {
    let entry = state.ledger_service.create_receivable(payload).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn update_receivable(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateAccountReceivable>,
) -> ApiResult<Json<AccountReceivable>> {
    Ok(Json(
        state.ledger_service.update_receivable(&id, payload).await?,
    ))
}

async fn set_receivable_status(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<StatusBody>,
) -> ApiResult<Json<AccountReceivable>> {
    Ok(Json(
        state
            .ledger_service
            .set_receivable_status(&id, &body.status)
            .await?,
    ))
}

async fn delete_receivable(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    if state.ledger_service.delete_receivable(&id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/accounts-receivable",
            get(list_receivables).post(create_receivable),
        )
        .route(
            "/accounts-receivable/{id}",
            get(get_receivable)
                .put(update_receivable)
                .delete(delete_receivable),
        )
        .route(
            "/accounts-receivable/{id}/status",
            patch(set_receivable_status),
        )
}

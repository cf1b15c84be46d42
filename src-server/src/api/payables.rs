use std::sync::Arc;

use crate::{
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
    AccountPayable, CreateAccountPayable, UpdateAccountPayable,
};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StatusBody {
    pub status: String,
}

async fn list_payables(
    Query(query): Query<PeriodQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<AccountPayable>>> {
    Ok(Json(state.ledger_service.get_payables(query.period()?)?))
}

async fn get_payable(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<AccountPayable>> {
    let entry = state
        .ledger_service
        .get_payable(&id)?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(entry))
}

async fn create_payable(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateAccountPayable>,
) -> ApiResult<(StatusCode, Json<AccountPayable>)> {
    let entry = state.ledger_service.create_payable(payload).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn update_payable(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateAccountPayable>,
) -> ApiResult<Json<AccountPayable>> {
    Ok(Json(state.ledger_service.update_payable(&id, payload).await?))
}

async fn set_payable_status(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<StatusBody>,
) -> ApiResult<Json<AccountPayable>> {
    Ok(Json(
        state.ledger_service.set_payable_status(&id, &body.status).await?,
    ))
}

async fn delete_payable(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    if state.ledger_service.delete_payable(&id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/accounts-payable",
            get(list_payables).post(create_payable),
        )
        .route(
            "/accounts-payable/{id}",
            get(get_payable).put(update_payable).delete(delete_payable),
        )
        .route("/accounts-payable/{id}/status", patch(set_payable_status))
}

use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use caixa_core::cost_centers::cost_centers_model::{
    CostCenter, CreateCostCenter, UpdateCostCenter,
};

async fn list_cost_centers(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CostCenter>>> {
    Ok(Json(state.cost_center_service.get_cost_centers()?))
}

async fn get_cost_center(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CostCenter>> {
    let center = state
        .cost_center_service
        .get_cost_center(&id)?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(center))
}

async fn create_cost_center(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateCostCenter>,
) -> ApiResult<(StatusCode, Json<CostCenter>)> {
    let center = state.cost_center_service.create_cost_center(payload).await?;
    Ok((StatusCode::CREATED, Json(center)))
}

async fn update_cost_center(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateCostCenter>,
) -> ApiResult<Json<CostCenter>> {
    Ok(Json(
        state.cost_center_service.update_cost_center(&id, payload).await?,
    ))
}

async fn delete_cost_center(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    if state.cost_center_service.delete_cost_center(&id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/cost-centers",
            get(list_cost_centers).post(create_cost_center),
        )
        .route(
            "/cost-centers/{id}",
            get(get_cost_center)
                .put(update_cost_center)
                .delete(delete_cost_center),
        )
}

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
use caixa_core::companies::companies_model::{Company, CreateCompany, UpdateCompany};

async fn list_companies(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Company>>> {
    Ok(Json(state.company_service.get_companies()?))
}

async fn get_company(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Company>> {
    let company = state
        .company_service
        .get_company(&id)?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(company))
}

async fn create_company(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateCompany>,
) -> ApiResult<(StatusCode, Json<Company>)> {
    let company = state.company_service.create_company(payload).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

async fn update_company(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateCompany>,
) -> ApiResult<Json<Company>> {
    Ok(Json(state.company_service.update_company(&id, payload).await?))
}

async fn delete_company(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    if state.company_service.delete_company(&id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/companies", get(list_companies).post(create_company))
        .route(
            "/companies/{id}",
            get(get_company).put(update_company).delete(delete_company),
        )
}

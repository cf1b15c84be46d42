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
use caixa_core::partners::partners_model::{CreatePartner, Customer, Supplier, UpdatePartner};

async fn list_suppliers(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Supplier>>> {
    Ok(Json(state.partner_service.get_suppliers()?))
}

async fn get_supplier(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Supplier>> {
    let supplier = state
        .partner_service
        .get_supplier(&id)?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(supplier))
}

async fn create_supplier(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePartner>,
) -> ApiResult<(StatusCode, Json<Supplier>)> {
    let supplier = state.partner_service.create_supplier(payload).await?;
    Ok((StatusCode::CREATED, Json(supplier)))
}

async fn update_supplier(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdatePartner>,
) -> ApiResult<Json<Supplier>> {
    Ok(Json(state.partner_service.update_supplier(&id, payload).await?))
}

async fn delete_supplier(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    if state.partner_service.delete_supplier(&id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn list_customers(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Customer>>> {
    Ok(Json(state.partner_service.get_customers()?))
}

async fn get_customer(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Customer>> {
    let customer = state
        .partner_service
        .get_customer(&id)?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(customer))
}

async fn create_customer(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePartner>,
) -> ApiResult<(StatusCode, Json<Customer>)> {
    let customer = state.partner_service.create_customer(payload).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

async fn update_customer(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdatePartner>,
) -> ApiResult<Json<Customer>> {
    Ok(Json(state.partner_service.update_customer(&id, payload).await?))
}

async fn delete_customer(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    if state.partner_service.delete_customer(&id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/suppliers", get(list_suppliers).post(create_supplier))
        .route(
            "/suppliers/{id}",
            get(get_supplier).put(update_supplier).delete(delete_supplier),
        )
        .route("/customers", get(list_customers).post(create_customer))
        .route(
            "/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}

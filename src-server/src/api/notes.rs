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
use caixa_core::notes::notes_model::{CreateNote, Note, UpdateNote};

async fn list_notes(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Note>>> {
    Ok(Json(state.note_service.get_notes()?))
}

async fn get_note(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Note>> {
    let note = state.note_service.get_note(&id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(note))
}

async fn create_note(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateNote>,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let note = state.note_service.create_note(payload).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

async fn update_note(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateNote>,
) -> ApiResult<Json<Note>> {
    Ok(Json(state.note_service.update_note(&id, payload).await?))
}

async fn delete_note(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    if state.note_service.delete_note(&id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route(
            "/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}

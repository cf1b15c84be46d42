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
use caixa_core::goals::goals_model::{CreateGoal, FinancialGoal, GoalProgress, UpdateGoal};

async fn list_goals(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<FinancialGoal>>> {
    Ok(Json(state.goal_service.get_goals()?))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateGoal>,
) -> ApiResult<(StatusCode, Json<FinancialGoal>)> {
    let goal = state.goal_service.create_goal(payload).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

async fn update_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateGoal>,
) -> ApiResult<Json<FinancialGoal>> {
    Ok(Json(state.goal_service.update_goal(&id, payload).await?))
}

async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    if state.goal_service.delete_goal(&id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Derived goal progress for one month; nothing is persisted, the
/// aggregation runs against the ledgers on every call.
async fn get_progress(
    Query(query): Query<PeriodQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<GoalProgress>>> {
    let (year, month) = query.required()?;
    Ok(Json(state.goal_service.get_progress(month as i32, year)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/financial-goals", get(list_goals).post(create_goal))
        .route("/financial-goals/progress", get(get_progress))
        .route(
            "/financial-goals/{id}",
            patch(update_goal).delete(delete_goal),
        )
}

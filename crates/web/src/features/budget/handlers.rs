use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use storage::dto::budget::{BudgetResponse, BudgetSummaryResponse, UpdateBudgetRequest};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/budget",
    responses(
        (status = 200, description = "Current budget configuration", body = BudgetResponse)
    ),
    tag = "budget"
)]
pub async fn get_budget(State(state): State<AppState>) -> Result<Response, WebError> {
    let budget = services::current_budget(state.store()).await?;

    Ok(Json(BudgetResponse::from(budget)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/budget",
    request_body = UpdateBudgetRequest,
    responses(
        (status = 200, description = "New budget configuration stored", body = BudgetResponse),
        (status = 400, description = "Malformed body or validation error")
    ),
    tag = "budget"
)]
pub async fn update_budget(
    State(state): State<AppState>,
    payload: Result<Json<UpdateBudgetRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;
    req.validate()?;

    let budget = services::update_budget(state.store(), req).await?;

    Ok(Json(BudgetResponse::from(budget)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/budget/summary",
    responses(
        (status = 200, description = "Spend, remaining and overflow per role", body = BudgetSummaryResponse)
    ),
    tag = "budget"
)]
pub async fn get_budget_summary(State(state): State<AppState>) -> Result<Response, WebError> {
    let summary = services::compute_budget_summary(state.store()).await?;

    Ok(Json(summary).into_response())
}

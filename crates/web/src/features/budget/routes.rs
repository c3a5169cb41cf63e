use axum::{Router, routing::get};

use super::handlers::{get_budget, get_budget_summary, update_budget};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_budget).put(update_budget))
        .route("/summary", get(get_budget_summary))
}

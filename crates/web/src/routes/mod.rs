use axum::Router;

use crate::features::{budget, health, players};
use crate::state::AppState;


pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/players", players::routes::routes())
        .nest("/budget", budget::routes::routes())
        .merge(health::routes::routes())
}

pub fn app(state: AppState) -> Router {
    Router::new().nest("/api", api_routes()).with_state(state)
}

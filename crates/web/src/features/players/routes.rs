use axum::{
    Router,
    routing::{get, put},
};

use super::handlers::{
    create_player, delete_player, get_players_by_role, get_primary_players, list_players,
    update_player,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_players).post(create_player))
        .route("/role/:role", get(get_players_by_role))
        .route("/primary/:role", get(get_primary_players))
        .route("/:id", put(update_player).delete(delete_player))
}

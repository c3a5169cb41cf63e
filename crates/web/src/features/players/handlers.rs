use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use storage::{
    dto::player::{PlayerRequest, PlayerResponse, PrimaryPlayerResponse},
    error::StorageError,
    models::Role,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::features::MessageResponse;
use crate::state::AppState;

use super::services;

fn parse_role(role: &str) -> Result<Role, WebError> {
    role.parse().map_err(WebError::BadRequest)
}

/// A malformed id cannot name any stored player.
fn parse_player_id(id: &str) -> Result<Uuid, WebError> {
    Uuid::parse_str(id).map_err(|_| WebError::Storage(StorageError::NotFound))
}

#[utoipa::path(
    get,
    path = "/api/players",
    responses(
        (status = 200, description = "List all players successfully", body = Vec<PlayerResponse>)
    ),
    tag = "players"
)]
pub async fn list_players(State(state): State<AppState>) -> Result<Response, WebError> {
    let players = services::list_players(state.store()).await?;

    let response: Vec<PlayerResponse> = players.into_iter().map(PlayerResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/players/role/{role}",
    params(
        ("role" = String, Path, description = "Role name (portiere, difensore, centrocampista, attaccante)")
    ),
    responses(
        (status = 200, description = "Role players, each primary choice followed by its backups", body = Vec<PlayerResponse>),
        (status = 400, description = "Unknown role")
    ),
    tag = "players"
)]
pub async fn get_players_by_role(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<Response, WebError> {
    let role = parse_role(&role)?;

    let players =
        services::organize_players_by_role(state.store(), role, state.organize_policy()).await?;

    let response: Vec<PlayerResponse> = players.into_iter().map(PlayerResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/players/primary/{role}",
    params(
        ("role" = String, Path, description = "Role name (portiere, difensore, centrocampista, attaccante)")
    ),
    responses(
        (status = 200, description = "Primary choices of the role", body = Vec<PrimaryPlayerResponse>),
        (status = 400, description = "Unknown role")
    ),
    tag = "players"
)]
pub async fn get_primary_players(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<Response, WebError> {
    let role = parse_role(&role)?;

    let players = services::list_primary_players(state.store(), role).await?;

    let response: Vec<PrimaryPlayerResponse> = players
        .into_iter()
        .map(PrimaryPlayerResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/players",
    request_body = PlayerRequest,
    responses(
        (status = 200, description = "Player created successfully", body = PlayerResponse),
        (status = 400, description = "Malformed body or validation error")
    ),
    tag = "players"
)]
pub async fn create_player(
    State(state): State<AppState>,
    payload: Result<Json<PlayerRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;
    req.validate()?;

    let player = services::create_player(state.store(), req).await?;

    Ok(Json(PlayerResponse::from(player)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/players/{id}",
    params(
        ("id" = String, Path, description = "Player ID")
    ),
    request_body = PlayerRequest,
    responses(
        (status = 200, description = "Player replaced successfully", body = PlayerResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PlayerRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;
    req.validate()?;
    let id = parse_player_id(&id)?;

    let updated = services::update_player(state.store(), id, req).await?;

    Ok(Json(PlayerResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    params(
        ("id" = String, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Player deleted successfully", body = MessageResponse),
        (status = 404, description = "Player not found")
    ),
    tag = "players"
)]
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let id = parse_player_id(&id)?;

    services::delete_player(state.store(), id).await?;

    Ok(Json(MessageResponse {
        message: "Player deleted successfully",
    })
    .into_response())
}

use storage::{
    RosterStore,
    dto::player::PlayerRequest,
    error::{Result, StorageError},
    models::{Player, PrimaryPlayer, Role},
    services::organizer::{self, OrganizePolicy},
};
use uuid::Uuid;

/// List all players
pub async fn list_players(store: &dyn RosterStore) -> Result<Vec<Player>> {
    store.fetch_all_players().await
}

/// List a role's players arranged by the given policy
pub async fn organize_players_by_role(
    store: &dyn RosterStore,
    role: Role,
    policy: OrganizePolicy,
) -> Result<Vec<Player>> {
    let players = store.fetch_players_by_role(role).await?;
    Ok(policy.organize(players))
}

/// Primary choices of a role, for selection lists
pub async fn list_primary_players(
    store: &dyn RosterStore,
    role: Role,
) -> Result<Vec<PrimaryPlayer>> {
    let players = store.fetch_players_by_role(role).await?;
    Ok(organizer::primary_players(&players))
}

/// Create a new player
pub async fn create_player(store: &dyn RosterStore, request: PlayerRequest) -> Result<Player> {
    let player = request.into_new_player();
    store.insert_player(&player).await?;

    tracing::info!(player_id = %player.id, role = %player.role, "Player created");
    Ok(player)
}

/// Replace a player, keeping its id and creation time
pub async fn update_player(
    store: &dyn RosterStore,
    id: Uuid,
    request: PlayerRequest,
) -> Result<Player> {
    let existing = store.fetch_player(id).await?.ok_or(StorageError::NotFound)?;
    let replacement = request.into_replacement(&existing);

    if store.replace_player(id, &replacement).await? == 0 {
        return Err(StorageError::NotFound);
    }

    tracing::info!(player_id = %id, "Player updated");
    Ok(replacement)
}

/// Delete a player. Backups that referenced it keep the now dangling reference.
pub async fn delete_player(store: &dyn RosterStore, id: Uuid) -> Result<()> {
    if store.delete_player(id).await? == 0 {
        tracing::debug!(player_id = %id, "Delete requested for unknown player");
        return Err(StorageError::NotFound);
    }

    tracing::info!(player_id = %id, "Player deleted");
    Ok(())
}

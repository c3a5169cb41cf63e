use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Player, Role};

const PLAYER_COLUMNS: &str = r#"
    id, name, team, role, goals, assists, is_penalty_taker, is_starter,
    price_paid, max_desired_price, is_primary_choice, priority_order,
    related_to_player_id, notes, created_at
"#;

#[derive(FromRow)]
struct PlayerRow {
    id: Uuid,
    name: String,
    team: String,
    role: String,
    goals: i32,
    assists: i32,
    is_penalty_taker: bool,
    is_starter: bool,
    price_paid: Decimal,
    max_desired_price: Decimal,
    is_primary_choice: bool,
    priority_order: i32,
    related_to_player_id: Option<Uuid>,
    notes: String,
    created_at: NaiveDateTime,
}

impl TryFrom<PlayerRow> for Player {
    type Error = StorageError;

    fn try_from(row: PlayerRow) -> Result<Self> {
        let role = row
            .role
            .parse::<Role>()
            .map_err(|e| StorageError::InvalidRecord(format!("player {}: {}", row.id, e)))?;

        Ok(Player {
            id: row.id,
            name: row.name,
            team: row.team,
            role,
            goals: row.goals,
            assists: row.assists,
            is_penalty_taker: row.is_penalty_taker,
            is_starter: row.is_starter,
            price_paid: row.price_paid,
            max_desired_price: row.max_desired_price,
            is_primary_choice: row.is_primary_choice,
            priority_order: row.priority_order,
            related_to_player_id: row.related_to_player_id,
            notes: row.notes,
            created_at: row.created_at,
        })
    }
}

pub struct PlayerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all players in creation order
    pub async fn list(&self) -> Result<Vec<Player>> {
        let rows: Vec<PlayerRow> = sqlx::query_as(&format!(
            "SELECT {} FROM players ORDER BY created_at",
            PLAYER_COLUMNS
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Player::try_from).collect()
    }

    /// List players of one role in creation order
    pub async fn list_by_role(&self, role: Role) -> Result<Vec<Player>> {
        let rows: Vec<PlayerRow> = sqlx::query_as(&format!(
            "SELECT {} FROM players WHERE role = $1 ORDER BY created_at",
            PLAYER_COLUMNS
        ))
        .bind(role.as_str())
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Player::try_from).collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Player>> {
        let row: Option<PlayerRow> = sqlx::query_as(&format!(
            "SELECT {} FROM players WHERE id = $1",
            PLAYER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(Player::try_from).transpose()
    }

    pub async fn insert(&self, player: &Player) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO players (
                id, name, team, role, goals, assists, is_penalty_taker, is_starter,
                price_paid, max_desired_price, is_primary_choice, priority_order,
                related_to_player_id, notes, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(player.id)
        .bind(&player.name)
        .bind(&player.team)
        .bind(player.role.as_str())
        .bind(player.goals)
        .bind(player.assists)
        .bind(player.is_penalty_taker)
        .bind(player.is_starter)
        .bind(player.price_paid)
        .bind(player.max_desired_price)
        .bind(player.is_primary_choice)
        .bind(player.priority_order)
        .bind(player.related_to_player_id)
        .bind(&player.notes)
        .bind(player.created_at)
        .execute(self.pool)
        .await
        .map_err(|e| {
            let error = StorageError::from(e);
            if error.is_unique_violation() {
                StorageError::ConstraintViolation(format!("player {} already exists", player.id))
            } else {
                error
            }
        })?;

        Ok(())
    }

    /// Replace every mutable field of a player. Returns the number of matched rows.
    pub async fn replace(&self, id: Uuid, player: &Player) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE players
            SET name = $2,
                team = $3,
                role = $4,
                goals = $5,
                assists = $6,
                is_penalty_taker = $7,
                is_starter = $8,
                price_paid = $9,
                max_desired_price = $10,
                is_primary_choice = $11,
                priority_order = $12,
                related_to_player_id = $13,
                notes = $14
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&player.name)
        .bind(&player.team)
        .bind(player.role.as_str())
        .bind(player.goals)
        .bind(player.assists)
        .bind(player.is_penalty_taker)
        .bind(player.is_starter)
        .bind(player.price_paid)
        .bind(player.max_desired_price)
        .bind(player.is_primary_choice)
        .bind(player.priority_order)
        .bind(player.related_to_player_id)
        .bind(&player.notes)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a player by ID. Backups pointing at it are left untouched.
    pub async fn delete(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

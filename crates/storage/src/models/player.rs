use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub team: String,
    pub role: Role,
    pub goals: i32,
    pub assists: i32,
    pub is_penalty_taker: bool,
    pub is_starter: bool,
    pub price_paid: Decimal,
    pub max_desired_price: Decimal,
    /// `false` marks a backup option for the role.
    pub is_primary_choice: bool,
    /// 1 for primaries, 2+ ranks backups (lower is preferred).
    pub priority_order: i32,
    /// The primary this backup stands in for. May dangle once that primary is deleted.
    pub related_to_player_id: Option<Uuid>,
    pub notes: String,
    pub created_at: NaiveDateTime,
}

/// Primary-only projection used by selection lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PrimaryPlayer {
    pub id: Uuid,
    pub name: String,
    pub team: String,
}

impl From<&Player> for PrimaryPlayer {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            team: player.team.clone(),
        }
    }
}

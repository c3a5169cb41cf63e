use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Player, PrimaryPlayer, Role};

/// Response containing a single player record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerResponse {
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
    pub is_primary_choice: bool,
    pub priority_order: i32,
    pub related_to_player_id: Option<Uuid>,
    pub notes: String,
    pub created_at: NaiveDateTime,
}

/// Primary choice entry for selection lists
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PrimaryPlayerResponse {
    pub id: Uuid,
    pub name: String,
    pub team: String,
}

/// Request payload for creating a player or fully replacing an existing one
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PlayerRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Team must be between 1 and 255 characters"
    ))]
    pub team: String,

    pub role: Role,

    #[serde(default)]
    #[validate(range(min = 0, message = "Goals cannot be negative"))]
    pub goals: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "Assists cannot be negative"))]
    pub assists: i32,

    #[serde(default)]
    pub is_penalty_taker: bool,

    #[serde(default)]
    pub is_starter: bool,

    #[serde(default)]
    #[validate(custom(function = "validate_amount"))]
    pub price_paid: Decimal,

    #[serde(default)]
    #[validate(custom(function = "validate_amount"))]
    pub max_desired_price: Decimal,

    #[serde(default = "default_primary_choice")]
    pub is_primary_choice: bool,

    #[serde(default = "default_priority_order")]
    #[validate(range(min = 1, message = "Priority order starts at 1"))]
    pub priority_order: i32,

    #[serde(default)]
    pub related_to_player_id: Option<Uuid>,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: String,
}

fn default_primary_choice() -> bool {
    true
}

fn default_priority_order() -> i32 {
    1
}

pub(crate) fn validate_amount(amount: &Decimal) -> Result<(), validator::ValidationError> {
    if *amount < Decimal::ZERO {
        let mut error = validator::ValidationError::new("negative_amount");
        error.message = Some("Amount cannot be negative".into());
        return Err(error);
    }
    Ok(())
}

impl PlayerRequest {
    /// Builds a brand new player with a fresh id.
    pub fn into_new_player(self) -> Player {
        self.into_player(Uuid::new_v4(), chrono::Utc::now().naive_utc())
    }

    /// Builds the replacement for `existing`, keeping its identity and creation time.
    pub fn into_replacement(self, existing: &Player) -> Player {
        self.into_player(existing.id, existing.created_at)
    }

    fn into_player(self, id: Uuid, created_at: NaiveDateTime) -> Player {
        Player {
            id,
            name: self.name,
            team: self.team,
            role: self.role,
            goals: self.goals,
            assists: self.assists,
            is_penalty_taker: self.is_penalty_taker,
            is_starter: self.is_starter,
            price_paid: self.price_paid,
            max_desired_price: self.max_desired_price,
            is_primary_choice: self.is_primary_choice,
            priority_order: self.priority_order,
            related_to_player_id: self.related_to_player_id,
            notes: self.notes,
            created_at,
        }
    }
}

impl From<Player> for PlayerResponse {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            name: player.name,
            team: player.team,
            role: player.role,
            goals: player.goals,
            assists: player.assists,
            is_penalty_taker: player.is_penalty_taker,
            is_starter: player.is_starter,
            price_paid: player.price_paid,
            max_desired_price: player.max_desired_price,
            is_primary_choice: player.is_primary_choice,
            priority_order: player.priority_order,
            related_to_player_id: player.related_to_player_id,
            notes: player.notes,
            created_at: player.created_at,
        }
    }
}

impl From<PrimaryPlayer> for PrimaryPlayerResponse {
    fn from(player: PrimaryPlayer) -> Self {
        Self {
            id: player.id,
            name: player.name,
            team: player.team,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> PlayerRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_minimal_payload_uses_defaults() {
        let req = request(serde_json::json!({
            "name": "Maignan",
            "team": "Milan",
            "role": "portiere"
        }));

        assert!(req.validate().is_ok());
        assert!(req.is_primary_choice);
        assert_eq!(req.priority_order, 1);
        assert_eq!(req.price_paid, Decimal::ZERO);
        assert!(req.related_to_player_id.is_none());
        assert!(req.notes.is_empty());
    }

    #[test]
    fn test_negative_values_are_rejected() {
        let req = request(serde_json::json!({
            "name": "Lautaro",
            "team": "Inter",
            "role": "attaccante",
            "goals": -1,
            "price_paid": -5.5,
            "priority_order": 0
        }));

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("goals"));
        assert!(fields.contains_key("price_paid"));
        assert!(fields.contains_key("priority_order"));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let req = request(serde_json::json!({
            "name": "",
            "team": "Napoli",
            "role": "difensore"
        }));

        assert!(req.validate().unwrap_err().field_errors().contains_key("name"));
    }

    #[test]
    fn test_replacement_keeps_identity() {
        let original = request(serde_json::json!({
            "name": "Barella",
            "team": "Inter",
            "role": "centrocampista",
            "price_paid": 30
        }))
        .into_new_player();

        let replacement = request(serde_json::json!({
            "name": "Barella",
            "team": "Inter",
            "role": "centrocampista",
            "price_paid": 42
        }))
        .into_replacement(&original);

        assert_eq!(replacement.id, original.id);
        assert_eq!(replacement.created_at, original.created_at);
        assert_eq!(replacement.price_paid, Decimal::from(42));
    }
}

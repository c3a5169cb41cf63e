//! Orders a role's players for display and planning.
//!
//! The relational policy emits each primary choice followed by the backups
//! that reference it, then every backup whose reference is missing or no
//! longer resolves. Nothing here fails: a dangling reference simply makes the
//! backup unrelated.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use uuid::Uuid;

use crate::models::{Player, PrimaryPlayer};

/// How a role's player list is arranged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrganizePolicy {
    /// Primary choices in creation order, each followed by its own backups.
    #[default]
    Relational,
    /// Legacy flat ordering: primaries first, then by priority, ignoring relations.
    PriorityOnly,
}

impl OrganizePolicy {
    pub fn organize(self, players: Vec<Player>) -> Vec<Player> {
        match self {
            Self::Relational => organize_by_relationship(players),
            Self::PriorityOnly => organize_by_priority(players),
        }
    }
}

impl FromStr for OrganizePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relational" => Ok(Self::Relational),
            "priority" | "priority_only" => Ok(Self::PriorityOnly),
            other => Err(format!(
                "unknown organize policy '{}', expected 'relational' or 'priority'",
                other
            )),
        }
    }
}

pub fn organize_by_relationship(players: Vec<Player>) -> Vec<Player> {
    let total = players.len();
    let (mut primaries, backups): (Vec<Player>, Vec<Player>) =
        players.into_iter().partition(|p| p.is_primary_choice);

    // Stable: equal timestamps keep their input order.
    primaries.sort_by_key(|p| p.created_at);

    let primary_ids: HashSet<Uuid> = primaries.iter().map(|p| p.id).collect();
    let mut related: HashMap<Uuid, Vec<Player>> = HashMap::new();
    let mut unrelated = Vec::new();

    for backup in backups {
        match backup
            .related_to_player_id
            .filter(|id| primary_ids.contains(id))
        {
            Some(primary_id) => related.entry(primary_id).or_default().push(backup),
            None => unrelated.push(backup),
        }
    }

    let mut organized = Vec::with_capacity(total);
    for primary in primaries {
        let mut group = related.remove(&primary.id).unwrap_or_default();
        group.sort_by_key(|p| p.priority_order);

        organized.push(primary);
        organized.extend(group);
    }

    unrelated.sort_by_key(|p| p.priority_order);
    organized.extend(unrelated);

    organized
}

pub fn organize_by_priority(mut players: Vec<Player>) -> Vec<Player> {
    players.sort_by_key(|p| (!p.is_primary_choice, p.priority_order));
    players
}

/// Primary choices only, in creation order.
pub fn primary_players(players: &[Player]) -> Vec<PrimaryPlayer> {
    let mut primaries: Vec<&Player> = players.iter().filter(|p| p.is_primary_choice).collect();
    primaries.sort_by_key(|p| p.created_at);
    primaries.into_iter().map(PrimaryPlayer::from).collect()
}

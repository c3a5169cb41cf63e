use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::Database;
use crate::error::Result;
use crate::models::{BudgetConfig, Player, Role};
use crate::repository::{budget::BudgetRepository, player::PlayerRepository};

/// The record operations the roster and budget services depend on.
///
/// Single-record writes are atomic per record; nothing here spans records.
#[async_trait]
pub trait RosterStore: Send + Sync {
    async fn fetch_all_players(&self) -> Result<Vec<Player>>;

    async fn fetch_players_by_role(&self, role: Role) -> Result<Vec<Player>>;

    async fn fetch_player(&self, id: Uuid) -> Result<Option<Player>>;

    async fn insert_player(&self, player: &Player) -> Result<()>;

    /// Returns the number of records matched by `id`.
    async fn replace_player(&self, id: Uuid, player: &Player) -> Result<u64>;

    /// Returns the number of records removed.
    async fn delete_player(&self, id: Uuid) -> Result<u64>;

    async fn fetch_latest_budget(&self) -> Result<Option<BudgetConfig>>;

    async fn insert_budget(&self, budget: &BudgetConfig) -> Result<()>;
}

#[async_trait]
impl RosterStore for Database {
    async fn fetch_all_players(&self) -> Result<Vec<Player>> {
        PlayerRepository::new(self.pool()).list().await
    }

    async fn fetch_players_by_role(&self, role: Role) -> Result<Vec<Player>> {
        PlayerRepository::new(self.pool()).list_by_role(role).await
    }

    async fn fetch_player(&self, id: Uuid) -> Result<Option<Player>> {
        PlayerRepository::new(self.pool()).find_by_id(id).await
    }

    async fn insert_player(&self, player: &Player) -> Result<()> {
        PlayerRepository::new(self.pool()).insert(player).await
    }

    async fn replace_player(&self, id: Uuid, player: &Player) -> Result<u64> {
        PlayerRepository::new(self.pool()).replace(id, player).await
    }

    async fn delete_player(&self, id: Uuid) -> Result<u64> {
        PlayerRepository::new(self.pool()).delete(id).await
    }

    async fn fetch_latest_budget(&self) -> Result<Option<BudgetConfig>> {
        BudgetRepository::new(self.pool()).latest().await
    }

    async fn insert_budget(&self, budget: &BudgetConfig) -> Result<()> {
        BudgetRepository::new(self.pool()).insert(budget).await
    }
}

/// Process-local store keeping records in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    players: RwLock<Vec<Player>>,
    budgets: RwLock<Vec<BudgetConfig>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RosterStore for MemoryStore {
    async fn fetch_all_players(&self) -> Result<Vec<Player>> {
        Ok(self.players.read().await.clone())
    }

    async fn fetch_players_by_role(&self, role: Role) -> Result<Vec<Player>> {
        let players = self.players.read().await;
        Ok(players.iter().filter(|p| p.role == role).cloned().collect())
    }

    async fn fetch_player(&self, id: Uuid) -> Result<Option<Player>> {
        let players = self.players.read().await;
        Ok(players.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_player(&self, player: &Player) -> Result<()> {
        let mut players = self.players.write().await;
        if players.iter().any(|p| p.id == player.id) {
            return Err(crate::error::StorageError::ConstraintViolation(format!(
                "player {} already exists",
                player.id
            )));
        }
        players.push(player.clone());
        Ok(())
    }

    async fn replace_player(&self, id: Uuid, player: &Player) -> Result<u64> {
        let mut players = self.players.write().await;
        match players.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                *existing = Player {
                    id,
                    created_at: existing.created_at,
                    ..player.clone()
                };
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_player(&self, id: Uuid) -> Result<u64> {
        let mut players = self.players.write().await;
        let before = players.len();
        players.retain(|p| p.id != id);
        Ok((before - players.len()) as u64)
    }

    async fn fetch_latest_budget(&self) -> Result<Option<BudgetConfig>> {
        let budgets = self.budgets.read().await;
        // max_by_key keeps the last of equal timestamps, i.e. the latest insert.
        Ok(budgets.iter().max_by_key(|b| b.created_at).cloned())
    }

    async fn insert_budget(&self, budget: &BudgetConfig) -> Result<()> {
        self.budgets.write().await.push(budget.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::RoleAllocations;

    fn player(name: &str, role: Role) -> Player {
        Player {
            id: Uuid::new_v4(),
            name: name.to_string(),
            team: "Atalanta".to_string(),
            role,
            goals: 0,
            assists: 0,
            is_penalty_taker: false,
            is_starter: false,
            price_paid: Decimal::ZERO,
            max_desired_price: Decimal::ZERO,
            is_primary_choice: true,
            priority_order: 1,
            related_to_player_id: None,
            notes: String::new(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[tokio::test]
    async fn test_fetch_by_role_filters_and_keeps_order() {
        let store = MemoryStore::new();
        let a = player("Carnesecchi", Role::Goalkeeper);
        let b = player("Ederson", Role::Midfielder);
        let c = player("Musso", Role::Goalkeeper);
        for p in [&a, &b, &c] {
            store.insert_player(p).await.unwrap();
        }

        let keepers = store.fetch_players_by_role(Role::Goalkeeper).await.unwrap();
        assert_eq!(keepers, vec![a, c]);
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_a_constraint_violation() {
        let store = MemoryStore::new();
        let p = player("Lookman", Role::Forward);
        store.insert_player(&p).await.unwrap();

        let err = store.insert_player(&p).await.unwrap_err();
        assert!(matches!(
            err,
            crate::error::StorageError::ConstraintViolation(_)
        ));
    }

    #[tokio::test]
    async fn test_replace_reports_matched_count() {
        let store = MemoryStore::new();
        let p = player("Retegui", Role::Forward);
        store.insert_player(&p).await.unwrap();

        let mut updated = p.clone();
        updated.price_paid = Decimal::from(33);
        assert_eq!(store.replace_player(p.id, &updated).await.unwrap(), 1);
        assert_eq!(
            store.replace_player(Uuid::new_v4(), &updated).await.unwrap(),
            0
        );

        let stored = store.fetch_player(p.id).await.unwrap().unwrap();
        assert_eq!(stored.price_paid, Decimal::from(33));
    }

    #[tokio::test]
    async fn test_delete_missing_id_leaves_store_unchanged() {
        let store = MemoryStore::new();
        store
            .insert_player(&player("Kolasinac", Role::Defender))
            .await
            .unwrap();
        let before = store.fetch_all_players().await.unwrap();

        assert_eq!(store.delete_player(Uuid::new_v4()).await.unwrap(), 0);
        assert_eq!(store.fetch_all_players().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_latest_budget_wins() {
        let store = MemoryStore::new();
        assert!(store.fetch_latest_budget().await.unwrap().is_none());

        let mut older = BudgetConfig::default_allocation();
        older.created_at -= chrono::Duration::minutes(5);
        let newer = BudgetConfig::new(Decimal::from(700), RoleAllocations::default());

        store.insert_budget(&newer).await.unwrap();
        store.insert_budget(&older).await.unwrap();

        let latest = store.fetch_latest_budget().await.unwrap().unwrap();
        assert_eq!(latest.id, newer.id);
    }
}

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::Role;

/// Per-role allocations. Stored rows missing a field are read back as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct RoleAllocations {
    #[serde(rename = "portiere_budget")]
    pub goalkeeper: Decimal,
    #[serde(rename = "difensore_budget")]
    pub defender: Decimal,
    #[serde(rename = "centrocampista_budget")]
    pub midfielder: Decimal,
    #[serde(rename = "attaccante_budget")]
    pub forward: Decimal,
}

impl RoleAllocations {
    pub fn get(&self, role: Role) -> Decimal {
        match role {
            Role::Goalkeeper => self.goalkeeper,
            Role::Defender => self.defender,
            Role::Midfielder => self.midfielder,
            Role::Forward => self.forward,
        }
    }

    pub fn sum(&self) -> Decimal {
        Role::ALL.iter().map(|role| self.get(*role)).sum()
    }
}

/// An append-only budget snapshot; the newest `created_at` is the current one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BudgetConfig {
    pub id: Uuid,
    pub total_budget: Decimal,
    #[serde(flatten)]
    pub allocations: RoleAllocations,
    pub created_at: NaiveDateTime,
}

impl BudgetConfig {
    pub fn new(total_budget: Decimal, allocations: RoleAllocations) -> Self {
        Self {
            id: Uuid::new_v4(),
            total_budget,
            allocations,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// The configuration persisted the first time a budget is requested from an empty store.
    pub fn default_allocation() -> Self {
        Self::new(
            Decimal::from(500),
            RoleAllocations {
                goalkeeper: Decimal::from(10),
                defender: Decimal::from(90),
                midfielder: Decimal::from(200),
                forward: Decimal::from(200),
            },
        )
    }

    pub fn allocation(&self, role: Role) -> Decimal {
        self.allocations.get(role)
    }
}

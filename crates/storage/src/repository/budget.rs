use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{BudgetConfig, RoleAllocations};

#[derive(FromRow)]
struct BudgetRow {
    id: Uuid,
    total_budget: Decimal,
    portiere_budget: Option<Decimal>,
    difensore_budget: Option<Decimal>,
    centrocampista_budget: Option<Decimal>,
    attaccante_budget: Option<Decimal>,
    created_at: NaiveDateTime,
}

impl From<BudgetRow> for BudgetConfig {
    fn from(row: BudgetRow) -> Self {
        Self {
            id: row.id,
            total_budget: row.total_budget,
            allocations: RoleAllocations {
                goalkeeper: row.portiere_budget.unwrap_or_default(),
                defender: row.difensore_budget.unwrap_or_default(),
                midfielder: row.centrocampista_budget.unwrap_or_default(),
                forward: row.attaccante_budget.unwrap_or_default(),
            },
            created_at: row.created_at,
        }
    }
}

pub struct BudgetRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BudgetRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The most recently created snapshot, if any
    pub async fn latest(&self) -> Result<Option<BudgetConfig>> {
        let row: Option<BudgetRow> = sqlx::query_as(
            r#"
            SELECT id, total_budget, portiere_budget, difensore_budget,
                   centrocampista_budget, attaccante_budget, created_at
            FROM budgets
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(BudgetConfig::from))
    }

    pub async fn insert(&self, budget: &BudgetConfig) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO budgets (
                id, total_budget, portiere_budget, difensore_budget,
                centrocampista_budget, attaccante_budget, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(budget.id)
        .bind(budget.total_budget)
        .bind(budget.allocations.goalkeeper)
        .bind(budget.allocations.defender)
        .bind(budget.allocations.midfielder)
        .bind(budget.allocations.forward)
        .bind(budget.created_at)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}

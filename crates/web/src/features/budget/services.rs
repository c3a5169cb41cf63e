use storage::{
    RosterStore,
    dto::budget::{BudgetSummaryResponse, UpdateBudgetRequest},
    error::Result,
    models::BudgetConfig,
    services::budget_summary,
};

/// The current budget, persisting the default configuration on first use
pub async fn current_budget(store: &dyn RosterStore) -> Result<BudgetConfig> {
    if let Some(budget) = store.fetch_latest_budget().await? {
        return Ok(budget);
    }

    let budget = BudgetConfig::default_allocation();
    store.insert_budget(&budget).await?;

    tracing::info!(budget_id = %budget.id, "No budget configured, stored default allocation");
    Ok(budget)
}

/// Append a new budget snapshot, which becomes the current one
pub async fn update_budget(
    store: &dyn RosterStore,
    request: UpdateBudgetRequest,
) -> Result<BudgetConfig> {
    let budget = request.into_budget();
    store.insert_budget(&budget).await?;

    tracing::info!(
        budget_id = %budget.id,
        total = %budget.total_budget,
        "Budget updated"
    );
    Ok(budget)
}

/// Spend summary against the current budget
pub async fn compute_budget_summary(store: &dyn RosterStore) -> Result<BudgetSummaryResponse> {
    let budget = current_budget(store).await?;
    let players = store.fetch_all_players().await?;

    Ok(budget_summary::summarize(&budget, &players))
}

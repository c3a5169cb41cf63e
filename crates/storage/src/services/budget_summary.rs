use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::dto::budget::{BudgetSummaryResponse, RoleSummary};
use crate::models::{BudgetConfig, Player, Role};

/// Derive per-role and overall spend figures from the current budget and the full roster.
pub fn summarize(budget: &BudgetConfig, players: &[Player]) -> BudgetSummaryResponse {
    let roles: BTreeMap<Role, RoleSummary> = Role::ALL
        .iter()
        .map(|&role| {
            let summary = summarize_role(
                budget.allocation(role),
                players.iter().filter(|p| p.role == role),
            );
            (role, summary)
        })
        .collect();

    let total_spent: Decimal = roles.values().map(|r| r.spent).sum();
    let total_max_desired: Decimal = roles.values().map(|r| r.max_desired_total).sum();

    BudgetSummaryResponse {
        total_budget: budget.total_budget,
        roles,
        total_spent,
        total_remaining: budget.total_budget - total_spent,
        total_max_desired,
    }
}

/// Every player's price counts as spent; only primaries count toward desired totals.
pub fn summarize_role<'a>(
    allocated: Decimal,
    players: impl IntoIterator<Item = &'a Player>,
) -> RoleSummary {
    let mut spent = Decimal::ZERO;
    let mut max_desired_total = Decimal::ZERO;
    let mut player_count = 0;
    let mut primary_choices_count = 0;

    for player in players {
        player_count += 1;
        spent += player.price_paid;

        if player.is_primary_choice {
            primary_choices_count += 1;
            max_desired_total += player.max_desired_price;
        }
    }

    RoleSummary {
        allocated,
        spent,
        remaining: allocated - spent,
        overflow: (spent - allocated).max(Decimal::ZERO),
        max_desired_total,
        player_count,
        primary_choices_count,
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::models::RoleAllocations;

    fn player(role: Role, primary: bool, paid: i64, desired: i64) -> Player {
        Player {
            id: Uuid::new_v4(),
            name: "Player".to_string(),
            team: "Bologna".to_string(),
            role,
            goals: 3,
            assists: 1,
            is_penalty_taker: false,
            is_starter: true,
            price_paid: Decimal::from(paid),
            max_desired_price: Decimal::from(desired),
            is_primary_choice: primary,
            priority_order: if primary { 1 } else { 2 },
            related_to_player_id: None,
            notes: String::new(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    fn budget_with_forward(allocation: i64) -> BudgetConfig {
        BudgetConfig::new(
            Decimal::from(500),
            RoleAllocations {
                goalkeeper: Decimal::from(10),
                defender: Decimal::from(90),
                midfielder: Decimal::from(200),
                forward: Decimal::from(allocation),
            },
        )
    }

    #[test]
    fn test_forward_role_within_allocation() {
        let players = vec![
            player(Role::Forward, true, 25, 30),
            player(Role::Forward, false, 15, 20),
        ];

        let summary = summarize(&budget_with_forward(200), &players);
        let forward = &summary.roles[&Role::Forward];

        assert_eq!(forward.spent, Decimal::from(40));
        assert_eq!(forward.max_desired_total, Decimal::from(30));
        assert_eq!(forward.remaining, Decimal::from(160));
        assert_eq!(forward.overflow, Decimal::ZERO);
        assert_eq!(forward.player_count, 2);
        assert_eq!(forward.primary_choices_count, 1);
    }

    #[test]
    fn test_forward_role_over_allocation() {
        let players = vec![
            player(Role::Forward, true, 25, 30),
            player(Role::Forward, false, 15, 20),
        ];

        let summary = summarize(&budget_with_forward(30), &players);
        let forward = &summary.roles[&Role::Forward];

        assert_eq!(forward.overflow, Decimal::from(10));
        assert_eq!(forward.remaining, Decimal::from(-10));
    }

    #[test]
    fn test_primary_flag_does_not_change_spend() {
        let mut players = vec![
            player(Role::Defender, true, 12, 15),
            player(Role::Defender, true, 8, 10),
        ];
        let before = summarize(&BudgetConfig::default_allocation(), &players);

        players[1].is_primary_choice = false;
        let after = summarize(&BudgetConfig::default_allocation(), &players);

        assert_eq!(
            before.roles[&Role::Defender].spent,
            after.roles[&Role::Defender].spent
        );
        assert_eq!(
            after.roles[&Role::Defender].max_desired_total,
            Decimal::from(15)
        );
    }

    #[test]
    fn test_backup_desired_price_never_counts() {
        let players = vec![
            player(Role::Midfielder, false, 0, 99),
            player(Role::Midfielder, false, 0, 1),
        ];

        let summary = summarize(&BudgetConfig::default_allocation(), &players);
        assert_eq!(
            summary.roles[&Role::Midfielder].max_desired_total,
            Decimal::ZERO
        );
        assert_eq!(summary.total_max_desired, Decimal::ZERO);
    }

    #[test]
    fn test_overflow_is_never_negative() {
        let players = vec![
            player(Role::Goalkeeper, true, 30, 30),
            player(Role::Defender, true, 5, 5),
        ];

        let summary = summarize(&BudgetConfig::default_allocation(), &players);
        for (role, role_summary) in &summary.roles {
            assert!(role_summary.overflow >= Decimal::ZERO, "{} overflow", role);
            assert_eq!(
                role_summary.overflow,
                (role_summary.spent - role_summary.allocated).max(Decimal::ZERO)
            );
        }
        assert_eq!(summary.roles[&Role::Goalkeeper].overflow, Decimal::from(20));
    }

    #[test]
    fn test_totals_aggregate_all_roles() {
        let players = vec![
            player(Role::Goalkeeper, true, 5, 8),
            player(Role::Defender, true, 20, 25),
            player(Role::Defender, false, 4, 6),
            player(Role::Midfielder, true, 60, 70),
            player(Role::Forward, true, 100, 120),
        ];

        let summary = summarize(&BudgetConfig::default_allocation(), &players);

        assert_eq!(summary.roles.len(), 4);
        assert_eq!(summary.total_budget, Decimal::from(500));
        assert_eq!(summary.total_spent, Decimal::from(189));
        assert_eq!(summary.total_remaining, Decimal::from(311));
        assert_eq!(summary.total_max_desired, Decimal::from(223));
    }

    #[test]
    fn test_empty_roster_reports_every_role() {
        let summary = summarize(&BudgetConfig::default_allocation(), &[]);

        let roles: Vec<Role> = summary.roles.keys().copied().collect();
        assert_eq!(roles, Role::ALL.to_vec());
        assert_eq!(summary.roles[&Role::Forward].remaining, Decimal::from(200));
        assert_eq!(summary.total_remaining, Decimal::from(500));
    }

    #[test]
    fn test_fractional_prices_are_exact() {
        let mut a = player(Role::Forward, true, 0, 0);
        a.price_paid = Decimal::new(101, 1);
        let mut b = player(Role::Forward, true, 0, 0);
        b.price_paid = Decimal::new(202, 1);

        let summary = summarize(&budget_with_forward(200), &[a, b]);
        assert_eq!(summary.roles[&Role::Forward].spent, Decimal::new(303, 1));
    }
}

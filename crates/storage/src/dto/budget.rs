use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::player::validate_amount;
use crate::models::{BudgetConfig, Role, RoleAllocations};

/// Current budget configuration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BudgetResponse {
    pub id: Uuid,
    pub total_budget: Decimal,
    pub portiere_budget: Decimal,
    pub difensore_budget: Decimal,
    pub centrocampista_budget: Decimal,
    pub attaccante_budget: Decimal,
    pub created_at: NaiveDateTime,
}

/// Request payload for posting a new budget configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateBudgetRequest {
    #[validate(custom(function = "validate_amount"))]
    pub total_budget: Decimal,

    #[validate(custom(function = "validate_amount"))]
    pub portiere_budget: Decimal,

    #[validate(custom(function = "validate_amount"))]
    pub difensore_budget: Decimal,

    #[validate(custom(function = "validate_amount"))]
    pub centrocampista_budget: Decimal,

    #[validate(custom(function = "validate_amount"))]
    pub attaccante_budget: Decimal,
}

/// Spend and planning figures for a single role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoleSummary {
    pub allocated: Decimal,
    pub spent: Decimal,
    /// Negative once the role is overspent.
    pub remaining: Decimal,
    pub overflow: Decimal,
    /// Sum of desired prices over primary choices only.
    pub max_desired_total: Decimal,
    pub player_count: usize,
    pub primary_choices_count: usize,
}

/// Budget summary across all roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BudgetSummaryResponse {
    pub total_budget: Decimal,
    pub roles: BTreeMap<Role, RoleSummary>,
    pub total_spent: Decimal,
    pub total_remaining: Decimal,
    pub total_max_desired: Decimal,
}

impl UpdateBudgetRequest {
    pub fn into_budget(self) -> BudgetConfig {
        BudgetConfig::new(
            self.total_budget,
            RoleAllocations {
                goalkeeper: self.portiere_budget,
                defender: self.difensore_budget,
                midfielder: self.centrocampista_budget,
                forward: self.attaccante_budget,
            },
        )
    }
}

impl From<BudgetConfig> for BudgetResponse {
    fn from(budget: BudgetConfig) -> Self {
        Self {
            id: budget.id,
            total_budget: budget.total_budget,
            portiere_budget: budget.allocations.goalkeeper,
            difensore_budget: budget.allocations.defender,
            centrocampista_budget: budget.allocations.midfielder,
            attaccante_budget: budget.allocations.forward,
            created_at: budget.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_maps_role_fields() {
        let req: UpdateBudgetRequest = serde_json::from_value(serde_json::json!({
            "total_budget": 600,
            "portiere_budget": 20,
            "difensore_budget": 100,
            "centrocampista_budget": 240,
            "attaccante_budget": 240
        }))
        .unwrap();
        assert!(req.validate().is_ok());

        let budget = req.into_budget();
        assert_eq!(budget.total_budget, Decimal::from(600));
        assert_eq!(budget.allocation(Role::Goalkeeper), Decimal::from(20));
        assert_eq!(budget.allocation(Role::Forward), Decimal::from(240));
    }

    #[test]
    fn test_update_request_requires_every_field() {
        let result = serde_json::from_value::<UpdateBudgetRequest>(serde_json::json!({
            "total_budget": 600,
            "portiere_budget": 20
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_allocation_is_rejected() {
        let req: UpdateBudgetRequest = serde_json::from_value(serde_json::json!({
            "total_budget": 500,
            "portiere_budget": -1,
            "difensore_budget": 90,
            "centrocampista_budget": 200,
            "attaccante_budget": 200
        }))
        .unwrap();
        assert!(
            req.validate()
                .unwrap_err()
                .field_errors()
                .contains_key("portiere_budget")
        );
    }

    #[test]
    fn test_summary_roles_serialize_by_record_name() {
        let mut roles = BTreeMap::new();
        for role in Role::ALL {
            roles.insert(
                role,
                RoleSummary {
                    allocated: Decimal::ZERO,
                    spent: Decimal::ZERO,
                    remaining: Decimal::ZERO,
                    overflow: Decimal::ZERO,
                    max_desired_total: Decimal::ZERO,
                    player_count: 0,
                    primary_choices_count: 0,
                },
            );
        }
        let summary = BudgetSummaryResponse {
            total_budget: Decimal::from(500),
            roles,
            total_spent: Decimal::ZERO,
            total_remaining: Decimal::from(500),
            total_max_desired: Decimal::ZERO,
        };

        let json = serde_json::to_value(&summary).unwrap();
        let keys: Vec<&String> = json["roles"].as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 4);
        assert!(json["roles"]["portiere"].is_object());
        assert!(json["roles"]["attaccante"]["overflow"].is_number());
    }
}

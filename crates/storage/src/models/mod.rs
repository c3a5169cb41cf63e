pub mod budget;
pub mod player;
pub mod role;

pub use budget::{BudgetConfig, RoleAllocations};
pub use player::{Player, PrimaryPlayer};
pub use role::Role;

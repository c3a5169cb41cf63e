pub mod budget;
pub mod health;
pub mod players;

use serde::Serialize;
use utoipa::ToSchema;

/// Plain acknowledgement body for operations that return no record.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: &'static str,
}

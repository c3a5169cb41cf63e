pub mod budget_summary;
pub mod organizer;

pub mod budget;
pub mod player;

//! SeaORM entities for the LevelUp database schema.

pub mod prelude;

pub mod event;
pub mod event_gamer;
pub mod game;
pub mod game_type;
pub mod gamer;

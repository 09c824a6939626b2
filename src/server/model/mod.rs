//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry the inputs
//! of a single create or update operation from the controller down to the data layer.

pub mod event;
pub mod game;
pub mod game_type;
pub mod gamer;

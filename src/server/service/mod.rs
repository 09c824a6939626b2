//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They resolve the foreign keys clients send (gamer uids, game and game type IDs),
//! turn missing records into `AppError::NotFound`, and compute the per-viewer
//! `joined` flag on events.

pub mod event;
pub mod game;
pub mod game_type;
pub mod gamer;

#[cfg(test)]
mod test;

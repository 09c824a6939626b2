//! JSON request and response bodies exchanged over the HTTP API.

pub mod api;
pub mod event;
pub mod game;
pub mod game_type;
pub mod gamer;

//! HTTP request handlers.
//!
//! Controllers extract path, query, header and JSON inputs, convert DTOs into
//! parameter models, call the matching service and convert the returned domain
//! models back into DTOs.

pub mod event;
pub mod extract;
pub mod game;
pub mod game_type;
pub mod gamer;
pub mod param;

#[cfg(test)]
mod test;

//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod event;
pub mod event_gamer;
pub mod game;
pub mod game_type;
pub mod gamer;


use std::collections::BTreeSet;

/// Maximum number of IDs bound into a single `IN (...)` clause, well under
/// SQLite's bound-variable limit.
const ID_BATCH_SIZE: usize = 500;

/// Deduplicates `ids` and splits them into batches for `IN (...)` lookups.
fn id_batches(ids: impl IntoIterator<Item = i32>) -> Vec<Vec<i32>> {
    let unique: Vec<i32> = ids.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

    unique
        .chunks(ID_BATCH_SIZE)
        .map(|batch| batch.to_vec())
        .collect()
}

//! Shared helper utilities for factory methods.
//!
//! Provides ID generation used by every factory and convenience methods for
//! creating entities together with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory;

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a game together with its owning gamer and game type.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((gamer, game_type, game))` - The created entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_game_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::gamer::Model,
        entity::game_type::Model,
        entity::game::Model,
    ),
    DbErr,
> {
    let gamer = factory::create_gamer(db).await?;
    let game_type = factory::create_game_type(db).await?;
    let game = factory::create_game(db, game_type.id, gamer.id).await?;

    Ok((gamer, game_type, game))
}

/// Creates an event hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Gamer (owner of the game and organizer of the event)
/// 2. Game type
/// 3. Game
/// 4. Event
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((gamer, game_type, game, event))` - The created entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_event_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::gamer::Model,
        entity::game_type::Model,
        entity::game::Model,
        entity::event::Model,
    ),
    DbErr,
> {
    let (gamer, game_type, game) = create_game_with_dependencies(db).await?;
    let event = factory::create_event(db, game.id, gamer.id).await?;

    Ok((gamer, game_type, game, event))
}

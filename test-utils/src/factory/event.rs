//! Event factory for creating test event entities.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::factory::helpers::next_id;

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::event::EventFactory;
///
/// let event = EventFactory::new(&db, game.id, organizer.id)
///     .description("Friday night")
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    game_id: i32,
    organizer_id: i32,
    description: String,
    date: NaiveDate,
    time: NaiveTime,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory scheduled for 2025-01-01 at 18:00:00.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `game_id` - ID of the game played at the event
    /// - `organizer_id` - ID of the organizing gamer
    pub fn new(db: &'a DatabaseConnection, game_id: i32, organizer_id: i32) -> Self {
        Self {
            db,
            game_id,
            organizer_id,
            description: format!("Event {}", next_id()),
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            time: NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn time(mut self, time: NaiveTime) -> Self {
        self.time = time;
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            game_id: ActiveValue::Set(self.game_id),
            description: ActiveValue::Set(self.description),
            date: ActiveValue::Set(self.date),
            time: ActiveValue::Set(self.time),
            organizer_id: ActiveValue::Set(self.organizer_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values.
pub async fn create_event(
    db: &DatabaseConnection,
    game_id: i32,
    organizer_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, game_id, organizer_id).build().await
}

/// Inserts `count` events for the same game and organizer using multi-row inserts.
///
/// Intended for tests that need more rows than a query can bind as parameters.
pub async fn create_events_bulk(
    db: &DatabaseConnection,
    game_id: i32,
    organizer_id: i32,
    count: usize,
) -> Result<(), DbErr> {
    const ROWS_PER_INSERT: usize = 1000;

    let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
    let time = NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default();

    let mut remaining = count;
    while remaining > 0 {
        let rows = remaining.min(ROWS_PER_INSERT);
        let models = (0..rows).map(|_| entity::event::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            description: ActiveValue::Set(format!("Event {}", next_id())),
            date: ActiveValue::Set(date),
            time: ActiveValue::Set(time),
            organizer_id: ActiveValue::Set(organizer_id),
            ..Default::default()
        });

        entity::prelude::Event::insert_many(models)
            .exec_without_returning(db)
            .await?;

        remaining -= rows;
    }

    Ok(())
}

//! Event data repository for database operations.
//!
//! Events are returned with their game (itself carrying type and owner) and
//! organizer attached. The `joined` flag is left `false`; it depends on the viewer
//! and is filled in by the service layer.

use std::collections::HashSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::{game::GameRepository, gamer::GamerRepository},
    model::event::{CreateEventParam, Event, UpdateEventParam},
};

/// Repository providing database operations for events.
pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new event organized by `organizer_id`.
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event with relations
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn create(&self, organizer_id: i32, param: CreateEventParam) -> Result<Event, DbErr> {
        let event = entity::event::ActiveModel {
            game_id: ActiveValue::Set(param.game_id),
            description: ActiveValue::Set(param.description),
            date: ActiveValue::Set(param.date),
            time: ActiveValue::Set(param.time),
            organizer_id: ActiveValue::Set(organizer_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(event.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Event with id {} not found after creation",
                event.id
            )))
    }

    /// Gets all events ordered by ID, optionally restricted to a single game.
    pub async fn get_all(&self, game_id: Option<i32>) -> Result<Vec<Event>, DbErr> {
        let mut query = entity::prelude::Event::find().order_by_asc(entity::event::Column::Id);

        if let Some(game_id) = game_id {
            query = query.filter(entity::event::Column::GameId.eq(game_id));
        }

        let events = query.all(self.db).await?;

        self.with_relations(events).await
    }

    /// Finds an event by ID with its game and organizer.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let Some(event) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.with_relations(vec![event]).await?.pop())
    }

    /// Returns whether an event with the ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let event = entity::prelude::Event::find_by_id(id).one(self.db).await?;

        Ok(event.is_some())
    }

    /// Replaces every field of an event.
    ///
    /// # Returns
    /// - `Ok(true)` - The event was updated
    /// - `Ok(false)` - No event exists with the ID
    pub async fn update(&self, id: i32, param: UpdateEventParam) -> Result<bool, DbErr> {
        let Some(existing) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        let mut active: entity::event::ActiveModel = existing.into();
        active.game_id = ActiveValue::Set(param.game_id);
        active.description = ActiveValue::Set(param.description);
        active.date = ActiveValue::Set(param.date);
        active.time = ActiveValue::Set(param.time);
        active.organizer_id = ActiveValue::Set(param.organizer_id);
        active.update(self.db).await?;

        Ok(true)
    }

    /// Deletes an event along with its attendance rows.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn with_relations(&self, events: Vec<entity::event::Model>) -> Result<Vec<Event>, DbErr> {
        let game_ids: HashSet<i32> = events.iter().map(|e| e.game_id).collect();
        let organizer_ids: HashSet<i32> = events.iter().map(|e| e.organizer_id).collect();

        let games = GameRepository::new(self.db).find_by_ids(game_ids).await?;
        let organizers = GamerRepository::new(self.db)
            .find_by_ids(organizer_ids)
            .await?;

        events
            .into_iter()
            .map(|event| {
                let game = games.get(&event.game_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Game {} referenced by event {} not found",
                        event.game_id, event.id
                    ))
                })?;
                let organizer = organizers.get(&event.organizer_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Organizer {} referenced by event {} not found",
                        event.organizer_id, event.id
                    ))
                })?;

                Ok(Event::from_entity(event, game, organizer))
            })
            .collect()
    }
}

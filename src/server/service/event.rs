use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        event::EventRepository, event_gamer::EventGamerRepository, game::GameRepository,
        gamer::GamerRepository,
    },
    error::AppError,
    model::{
        event::{CreateEventParam, Event, UpdateEventParam},
        gamer::Gamer,
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists events, restricted to one game when `game_id` is given.
    ///
    /// When a viewer is provided each event's `joined` flag reports whether the viewer
    /// has signed up for it; without a viewer every flag is `false`.
    pub async fn list(
        &self,
        game_id: Option<i32>,
        viewer: Option<&Gamer>,
    ) -> Result<Vec<Event>, AppError> {
        let mut events = EventRepository::new(self.db).get_all(game_id).await?;

        if let Some(viewer) = viewer {
            let event_ids = events.iter().map(|e| e.id).collect();
            let joined = EventGamerRepository::new(self.db)
                .joined_event_ids(viewer.id, event_ids)
                .await?;

            for event in &mut events {
                event.joined = joined.contains(&event.id);
            }
        }

        Ok(events)
    }

    /// Gets an event by ID with `joined` computed for the viewer, if any.
    pub async fn get_by_id(
        &self,
        id: i32,
        viewer: Option<&Gamer>,
    ) -> Result<Option<Event>, AppError> {
        let Some(mut event) = EventRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(viewer) = viewer {
            event.joined = EventGamerRepository::new(self.db)
                .is_joined(viewer.id, event.id)
                .await?;
        }

        Ok(Some(event))
    }

    /// Creates an event for `param.game_id` organized by `param.organizer_uid`.
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event
    /// - `Err(AppError::NotFound)` - The game or organizer does not exist
    pub async fn create(&self, param: CreateEventParam) -> Result<Event, AppError> {
        self.ensure_game(param.game_id).await?;

        let organizer = GamerRepository::new(self.db)
            .find_by_uid(&param.organizer_uid)
            .await?
            .ok_or_else(|| AppError::NotFound("Organizer not found".to_string()))?;

        let event = EventRepository::new(self.db)
            .create(organizer.id, param)
            .await?;

        Ok(event)
    }

    /// Replaces every field of an event. The organizer is referenced by gamer ID.
    ///
    /// # Returns
    /// - `Ok(())` - The event was updated
    /// - `Err(AppError::NotFound)` - The event, game or organizer does not exist
    pub async fn update(&self, id: i32, param: UpdateEventParam) -> Result<(), AppError> {
        let repo = EventRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound("Event not found".to_string()));
        }

        self.ensure_game(param.game_id).await?;

        if GamerRepository::new(self.db)
            .find_by_id(param.organizer_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Organizer not found".to_string()));
        }

        repo.update(id, param).await?;

        Ok(())
    }

    /// Deletes an event together with its attendance rows.
    /// Returns false if the event doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(EventRepository::new(self.db).delete(id).await?)
    }

    /// Signs the gamer up for the event. Signing up again is a no-op.
    ///
    /// # Returns
    /// - `Ok(())` - The gamer attends the event
    /// - `Err(AppError::NotFound)` - The event does not exist
    pub async fn signup(&self, id: i32, gamer: &Gamer) -> Result<(), AppError> {
        self.ensure_event(id).await?;

        EventGamerRepository::new(self.db).join(gamer.id, id).await?;

        tracing::debug!("Gamer {} signed up for event {}", gamer.id, id);

        Ok(())
    }

    /// Removes the gamer from the event's attendees, if they were signed up.
    ///
    /// # Returns
    /// - `Ok(())` - The gamer no longer attends the event
    /// - `Err(AppError::NotFound)` - The event does not exist
    pub async fn leave(&self, id: i32, gamer: &Gamer) -> Result<(), AppError> {
        self.ensure_event(id).await?;

        let removed = EventGamerRepository::new(self.db)
            .leave(gamer.id, id)
            .await?;

        if removed {
            tracing::debug!("Gamer {} left event {}", gamer.id, id);
        }

        Ok(())
    }

    async fn ensure_event(&self, id: i32) -> Result<(), AppError> {
        if EventRepository::new(self.db).exists(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound("Event not found".to_string()))
        }
    }

    async fn ensure_game(&self, game_id: i32) -> Result<(), AppError> {
        if GameRepository::new(self.db).exists(game_id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound("Game not found".to_string()))
        }
    }
}

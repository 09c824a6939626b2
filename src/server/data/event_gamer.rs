//! Attendance repository linking gamers to the events they signed up for.

use std::collections::HashSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct EventGamerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventGamerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records that a gamer attends an event.
    ///
    /// Does nothing when the attendance row already exists, so a gamer is never
    /// listed twice for the same event. The unique `(gamer_id, event_id)` index rejects
    /// a concurrent duplicate insert, which is treated as already joined.
    pub async fn join(&self, gamer_id: i32, event_id: i32) -> Result<(), DbErr> {
        if self.is_joined(gamer_id, event_id).await? {
            return Ok(());
        }

        let inserted = entity::event_gamer::ActiveModel {
            gamer_id: ActiveValue::Set(gamer_id),
            event_id: ActiveValue::Set(event_id),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        if let Err(err) = inserted {
            if !self.is_joined(gamer_id, event_id).await? {
                return Err(err);
            }
        }

        Ok(())
    }

    /// Removes a gamer's attendance at an event.
    ///
    /// # Returns
    /// - `Ok(true)` - The attendance row was removed
    /// - `Ok(false)` - The gamer was not signed up
    pub async fn leave(&self, gamer_id: i32, event_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::EventGamer::delete_many()
            .filter(entity::event_gamer::Column::GamerId.eq(gamer_id))
            .filter(entity::event_gamer::Column::EventId.eq(event_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn is_joined(&self, gamer_id: i32, event_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::EventGamer::find()
            .filter(entity::event_gamer::Column::GamerId.eq(gamer_id))
            .filter(entity::event_gamer::Column::EventId.eq(event_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns the subset of `event_ids` the gamer has signed up for.
    ///
    /// Loads the gamer's attendance rows and intersects them in memory, so the number
    /// of events asked about never reaches the query.
    pub async fn joined_event_ids(
        &self,
        gamer_id: i32,
        event_ids: Vec<i32>,
    ) -> Result<HashSet<i32>, DbErr> {
        if event_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let wanted: HashSet<i32> = event_ids.into_iter().collect();

        let rows = entity::prelude::EventGamer::find()
            .filter(entity::event_gamer::Column::GamerId.eq(gamer_id))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| row.event_id)
            .filter(|event_id| wanted.contains(event_id))
            .collect())
    }
}

//! Gamer data repository for database operations.
//!
//! Provides the `GamerRepository` for registering gamers and resolving them by ID or by
//! the uid clients present as their identity.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::{
    data::id_batches,
    model::gamer::{Gamer, RegisterGamerParam},
};

/// Repository providing database operations for gamers.
pub struct GamerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GamerRepository<'a> {
    /// Creates a new GamerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new gamer.
    ///
    /// # Returns
    /// - `Ok(Gamer)` - The created gamer
    /// - `Err(DbErr)` - Database error, including a uniqueness violation on `uid`
    pub async fn create(&self, param: RegisterGamerParam) -> Result<Gamer, DbErr> {
        let entity = entity::gamer::ActiveModel {
            uid: ActiveValue::Set(param.uid),
            bio: ActiveValue::Set(param.bio),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Gamer::from_entity(entity))
    }

    /// Finds a gamer by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Gamer>, DbErr> {
        let entity = entity::prelude::Gamer::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Gamer::from_entity))
    }

    /// Finds a gamer by uid.
    ///
    /// # Returns
    /// - `Ok(Some(Gamer))` - A gamer is registered with the uid
    /// - `Ok(None)` - No gamer uses the uid
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_uid(&self, uid: &str) -> Result<Option<Gamer>, DbErr> {
        let entity = entity::prelude::Gamer::find()
            .filter(entity::gamer::Column::Uid.eq(uid))
            .one(self.db)
            .await?;

        Ok(entity.map(Gamer::from_entity))
    }

    /// Loads every gamer in `ids`, keyed by ID.
    ///
    /// Duplicate IDs are queried once. IDs without a matching row are absent from the
    /// returned map.
    pub async fn find_by_ids(
        &self,
        ids: impl IntoIterator<Item = i32>,
    ) -> Result<HashMap<i32, Gamer>, DbErr> {
        let mut gamers = HashMap::new();

        for batch in id_batches(ids) {
            let rows = entity::prelude::Gamer::find()
                .filter(entity::gamer::Column::Id.is_in(batch))
                .all(self.db)
                .await?;

            gamers.extend(rows.into_iter().map(|g| (g.id, Gamer::from_entity(g))));
        }

        Ok(gamers)
    }
}

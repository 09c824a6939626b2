//! Game type data repository for database operations.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::id_batches,
    model::game_type::{CreateGameTypeParam, GameType, UpdateGameTypeParam},
};

/// Repository providing database operations for game types.
pub struct GameTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameTypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new game type.
    pub async fn create(&self, param: CreateGameTypeParam) -> Result<GameType, DbErr> {
        let entity = entity::game_type::ActiveModel {
            label: ActiveValue::Set(param.label),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(GameType::from_entity(entity))
    }

    /// Gets all game types ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<GameType>, DbErr> {
        let game_types = entity::prelude::GameType::find()
            .order_by_asc(entity::game_type::Column::Id)
            .all(self.db)
            .await?;

        Ok(game_types.into_iter().map(GameType::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<GameType>, DbErr> {
        let entity = entity::prelude::GameType::find_by_id(id).one(self.db).await?;

        Ok(entity.map(GameType::from_entity))
    }

    /// Loads every game type in `ids`, keyed by ID.
    pub async fn find_by_ids(
        &self,
        ids: impl IntoIterator<Item = i32>,
    ) -> Result<HashMap<i32, GameType>, DbErr> {
        let mut game_types = HashMap::new();

        for batch in id_batches(ids) {
            let rows = entity::prelude::GameType::find()
                .filter(entity::game_type::Column::Id.is_in(batch))
                .all(self.db)
                .await?;

            game_types.extend(rows.into_iter().map(|t| (t.id, GameType::from_entity(t))));
        }

        Ok(game_types)
    }

    /// Updates the label of a game type.
    ///
    /// # Returns
    /// - `Ok(Some(GameType))` - The updated game type
    /// - `Ok(None)` - No game type exists with the ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateGameTypeParam,
    ) -> Result<Option<GameType>, DbErr> {
        let Some(existing) = entity::prelude::GameType::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::game_type::ActiveModel = existing.into();
        active.label = ActiveValue::Set(param.label);

        let updated = active.update(self.db).await?;

        Ok(Some(GameType::from_entity(updated)))
    }

    /// Deletes a game type, cascading to its games.
    ///
    /// # Returns
    /// - `Ok(true)` - The game type was deleted
    /// - `Ok(false)` - No game type exists with the ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::GameType::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

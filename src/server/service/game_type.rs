use sea_orm::DatabaseConnection;

use crate::server::{
    data::game_type::GameTypeRepository,
    error::AppError,
    model::game_type::{CreateGameTypeParam, GameType, UpdateGameTypeParam},
};

pub struct GameTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateGameTypeParam) -> Result<GameType, AppError> {
        Ok(GameTypeRepository::new(self.db).create(param).await?)
    }

    pub async fn list(&self) -> Result<Vec<GameType>, AppError> {
        Ok(GameTypeRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<GameType>, AppError> {
        Ok(GameTypeRepository::new(self.db).find_by_id(id).await?)
    }

    /// Updates a game type's label.
    /// Returns None if the game type doesn't exist
    pub async fn update(
        &self,
        id: i32,
        param: UpdateGameTypeParam,
    ) -> Result<Option<GameType>, AppError> {
        Ok(GameTypeRepository::new(self.db).update(id, param).await?)
    }

    /// Deletes a game type and, through the foreign key, its games.
    /// Returns false if the game type doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(GameTypeRepository::new(self.db).delete(id).await?)
    }
}

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{game::GameRepository, game_type::GameTypeRepository, gamer::GamerRepository},
    error::AppError,
    model::game::{CreateGameParam, Game, UpdateGameParam},
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a game owned by the gamer with `param.gamer_uid`.
    ///
    /// # Returns
    /// - `Ok(Game)` - The created game with relations
    /// - `Err(AppError::NotFound)` - The owner uid or game type does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateGameParam) -> Result<Game, AppError> {
        let gamer = GamerRepository::new(self.db)
            .find_by_uid(&param.gamer_uid)
            .await?
            .ok_or_else(|| AppError::NotFound("Gamer not found".to_string()))?;

        self.ensure_game_type(param.game_type_id).await?;

        Ok(GameRepository::new(self.db).create(gamer.id, param).await?)
    }

    /// Lists games, restricted to one game type when `game_type_id` is given.
    pub async fn list(&self, game_type_id: Option<i32>) -> Result<Vec<Game>, AppError> {
        Ok(GameRepository::new(self.db).get_all(game_type_id).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Game>, AppError> {
        Ok(GameRepository::new(self.db).find_by_id(id).await?)
    }

    /// Updates a game's details and type.
    ///
    /// # Returns
    /// - `Ok(())` - The game was updated
    /// - `Err(AppError::NotFound)` - The game or the new game type does not exist
    pub async fn update(&self, id: i32, param: UpdateGameParam) -> Result<(), AppError> {
        let repo = GameRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound("Game not found".to_string()));
        }

        self.ensure_game_type(param.game_type_id).await?;

        repo.update(id, param).await?;

        Ok(())
    }

    /// Deletes a game and, through the foreign key, its events.
    /// Returns false if the game doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(GameRepository::new(self.db).delete(id).await?)
    }

    async fn ensure_game_type(&self, game_type_id: i32) -> Result<(), AppError> {
        match GameTypeRepository::new(self.db)
            .find_by_id(game_type_id)
            .await?
        {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("Game type not found".to_string())),
        }
    }
}

//! Game data repository for database operations.
//!
//! Games are returned with their game type and owner attached. Relations for a batch
//! of games are loaded with one query per related table rather than one per game.

use std::collections::{HashMap, HashSet};

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::{game_type::GameTypeRepository, gamer::GamerRepository, id_batches},
    model::game::{CreateGameParam, Game, UpdateGameParam},
};

/// Repository providing database operations for games.
pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new game owned by `gamer_id`.
    ///
    /// # Arguments
    /// - `gamer_id` - ID of the resolved owning gamer
    /// - `param` - Game fields; `param.game_type_id` must reference an existing game type
    ///
    /// # Returns
    /// - `Ok(Game)` - The created game with relations
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn create(&self, gamer_id: i32, param: CreateGameParam) -> Result<Game, DbErr> {
        let game = entity::game::ActiveModel {
            game_type_id: ActiveValue::Set(param.game_type_id),
            title: ActiveValue::Set(param.title),
            maker: ActiveValue::Set(param.maker),
            gamer_id: ActiveValue::Set(gamer_id),
            number_of_players: ActiveValue::Set(param.number_of_players),
            skill_level: ActiveValue::Set(param.skill_level),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(game.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Game with id {} not found after creation",
                game.id
            )))
    }

    /// Gets all games ordered by ID, optionally restricted to a single game type.
    pub async fn get_all(&self, game_type_id: Option<i32>) -> Result<Vec<Game>, DbErr> {
        let mut query = entity::prelude::Game::find().order_by_asc(entity::game::Column::Id);

        if let Some(game_type_id) = game_type_id {
            query = query.filter(entity::game::Column::GameTypeId.eq(game_type_id));
        }

        let games = query.all(self.db).await?;

        self.with_relations(games).await
    }

    /// Finds a game by ID with its game type and owner.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Game>, DbErr> {
        let Some(game) = entity::prelude::Game::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.with_relations(vec![game]).await?.pop())
    }

    /// Returns whether a game with the ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let game = entity::prelude::Game::find_by_id(id).one(self.db).await?;

        Ok(game.is_some())
    }

    /// Loads every game in `ids` with relations, keyed by ID.
    pub async fn find_by_ids(
        &self,
        ids: impl IntoIterator<Item = i32>,
    ) -> Result<HashMap<i32, Game>, DbErr> {
        let mut games = Vec::new();

        for batch in id_batches(ids) {
            games.extend(
                entity::prelude::Game::find()
                    .filter(entity::game::Column::Id.is_in(batch))
                    .all(self.db)
                    .await?,
            );
        }

        Ok(self
            .with_relations(games)
            .await?
            .into_iter()
            .map(|g| (g.id, g))
            .collect())
    }

    /// Updates a game in place. The owner is left unchanged.
    ///
    /// # Returns
    /// - `Ok(true)` - The game was updated
    /// - `Ok(false)` - No game exists with the ID
    pub async fn update(&self, id: i32, param: UpdateGameParam) -> Result<bool, DbErr> {
        let Some(existing) = entity::prelude::Game::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        let mut active: entity::game::ActiveModel = existing.into();
        active.game_type_id = ActiveValue::Set(param.game_type_id);
        active.title = ActiveValue::Set(param.title);
        active.maker = ActiveValue::Set(param.maker);
        active.number_of_players = ActiveValue::Set(param.number_of_players);
        active.skill_level = ActiveValue::Set(param.skill_level);
        active.update(self.db).await?;

        Ok(true)
    }

    /// Deletes a game, cascading to its events.
    ///
    /// # Returns
    /// - `Ok(true)` - The game was deleted
    /// - `Ok(false)` - No game exists with the ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Game::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Attaches game types and owners to a batch of game rows, preserving order.
    async fn with_relations(&self, games: Vec<entity::game::Model>) -> Result<Vec<Game>, DbErr> {
        let game_type_ids: HashSet<i32> = games.iter().map(|g| g.game_type_id).collect();
        let gamer_ids: HashSet<i32> = games.iter().map(|g| g.gamer_id).collect();

        let game_types = GameTypeRepository::new(self.db)
            .find_by_ids(game_type_ids)
            .await?;
        let gamers = GamerRepository::new(self.db).find_by_ids(gamer_ids).await?;

        games
            .into_iter()
            .map(|game| {
                let game_type = game_types.get(&game.game_type_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Game type {} referenced by game {} not found",
                        game.game_type_id, game.id
                    ))
                })?;
                let gamer = gamers.get(&game.gamer_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Gamer {} referenced by game {} not found",
                        game.gamer_id, game.id
                    ))
                })?;

                Ok(Game::from_entity(game, game_type, gamer))
            })
            .collect()
    }
}

//! Game factory for creating test game entities.
//!
//! Games reference both a game type and an owning gamer, so both IDs must be
//! supplied. Use `helpers::create_game_with_dependencies` to create them together.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::game::GameFactory;
///
/// let game = GameFactory::new(&db, game_type.id, gamer.id)
///     .title("Catan")
///     .number_of_players(4)
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::game::Model,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Game {id}"`
    /// - maker: `"Maker {id}"`
    /// - number_of_players: `4`
    /// - skill_level: `3`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `game_type_id` - ID of the game type the game belongs to
    /// - `gamer_id` - ID of the gamer who owns the game
    pub fn new(db: &'a DatabaseConnection, game_type_id: i32, gamer_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            entity: entity::game::Model {
                id: 0,
                game_type_id,
                title: format!("Game {}", id),
                maker: format!("Maker {}", id),
                gamer_id,
                number_of_players: 4,
                skill_level: 3,
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    pub fn maker(mut self, maker: impl Into<String>) -> Self {
        self.entity.maker = maker.into();
        self
    }

    pub fn number_of_players(mut self, number_of_players: i32) -> Self {
        self.entity.number_of_players = number_of_players;
        self
    }

    pub fn skill_level(mut self, skill_level: i32) -> Self {
        self.entity.skill_level = skill_level;
        self
    }

    /// Builds and inserts the game entity into the database.
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            game_type_id: ActiveValue::Set(self.entity.game_type_id),
            title: ActiveValue::Set(self.entity.title),
            maker: ActiveValue::Set(self.entity.maker),
            gamer_id: ActiveValue::Set(self.entity.gamer_id),
            number_of_players: ActiveValue::Set(self.entity.number_of_players),
            skill_level: ActiveValue::Set(self.entity.skill_level),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values.
pub async fn create_game(
    db: &DatabaseConnection,
    game_type_id: i32,
    gamer_id: i32,
) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db, game_type_id, gamer_id).build().await
}

//! Game domain model and parameters.
//!
//! A game always carries its resolved game type and owning gamer so it can be
//! rendered with both relations expanded.

use crate::{
    model::game::{CreateGameDto, GameDto, UpdateGameDto},
    server::model::{game_type::GameType, gamer::Gamer},
};

/// A catalogued game owned by a gamer.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub game_type: GameType,
    pub title: String,
    pub maker: String,
    pub gamer: Gamer,
    pub number_of_players: i32,
    pub skill_level: i32,
}

impl Game {
    /// Builds a game domain model from the entity and its already loaded relations.
    ///
    /// # Arguments
    /// - `entity` - The game row
    /// - `game_type` - The game type referenced by `entity.game_type_id`
    /// - `gamer` - The owner referenced by `entity.gamer_id`
    pub fn from_entity(entity: entity::game::Model, game_type: GameType, gamer: Gamer) -> Self {
        Self {
            id: entity.id,
            game_type,
            title: entity.title,
            maker: entity.maker,
            gamer,
            number_of_players: entity.number_of_players,
            skill_level: entity.skill_level,
        }
    }

    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            game_type: self.game_type.into_dto(),
            maker: self.maker,
            gamer: self.gamer.into_dto(),
            number_of_players: self.number_of_players,
            skill_level: self.skill_level,
            title: self.title,
        }
    }
}

/// Parameters for creating a game.
///
/// The owner is referenced by uid and the type by ID exactly as the client sent
/// them; the service resolves both before inserting.
#[derive(Debug, Clone)]
pub struct CreateGameParam {
    pub gamer_uid: String,
    pub game_type_id: i32,
    pub title: String,
    pub maker: String,
    pub number_of_players: i32,
    pub skill_level: i32,
}

impl From<CreateGameDto> for CreateGameParam {
    fn from(dto: CreateGameDto) -> Self {
        Self {
            gamer_uid: dto.user_id,
            game_type_id: dto.game_type,
            title: dto.title,
            maker: dto.maker,
            number_of_players: dto.number_of_players,
            skill_level: dto.skill_level,
        }
    }
}

/// Parameters for updating a game. Ownership is never transferred.
#[derive(Debug, Clone)]
pub struct UpdateGameParam {
    pub game_type_id: i32,
    pub title: String,
    pub maker: String,
    pub number_of_players: i32,
    pub skill_level: i32,
}

impl From<UpdateGameDto> for UpdateGameParam {
    fn from(dto: UpdateGameDto) -> Self {
        Self {
            game_type_id: dto.game_type,
            title: dto.title,
            maker: dto.maker,
            number_of_players: dto.number_of_players,
            skill_level: dto.skill_level,
        }
    }
}

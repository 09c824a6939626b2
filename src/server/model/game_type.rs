//! Game type domain model and parameters.

use crate::model::game_type::{CreateGameTypeDto, GameTypeDto, UpdateGameTypeDto};

/// A category of game, such as "Board game" or "Card game".
#[derive(Debug, Clone, PartialEq)]
pub struct GameType {
    pub id: i32,
    pub label: String,
}

impl GameType {
    pub fn from_entity(entity: entity::game_type::Model) -> Self {
        Self {
            id: entity.id,
            label: entity.label,
        }
    }

    pub fn into_dto(self) -> GameTypeDto {
        GameTypeDto {
            id: self.id,
            label: self.label,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGameTypeParam {
    pub label: String,
}

impl From<CreateGameTypeDto> for CreateGameTypeParam {
    fn from(dto: CreateGameTypeDto) -> Self {
        Self { label: dto.label }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateGameTypeParam {
    pub label: String,
}

impl From<UpdateGameTypeDto> for UpdateGameTypeParam {
    fn from(dto: UpdateGameTypeDto) -> Self {
        Self { label: dto.label }
    }
}

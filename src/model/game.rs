use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{game_type::GameTypeDto, gamer::GamerDto};

/// A game with its type and owner expanded one level deep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameDto {
    pub id: i32,
    pub game_type: GameTypeDto,
    pub maker: String,
    pub gamer: GamerDto,
    pub number_of_players: i32,
    pub skill_level: i32,
    pub title: String,
}

/// Body of `POST /games`. The owner is referenced by uid, the type by id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameDto {
    pub user_id: String,
    pub game_type: i32,
    pub title: String,
    pub maker: String,
    pub number_of_players: i32,
    pub skill_level: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGameDto {
    pub game_type: i32,
    pub title: String,
    pub maker: String,
    pub number_of_players: i32,
    pub skill_level: i32,
}

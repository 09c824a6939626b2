use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{game::GameDto, gamer::GamerDto};

/// An event with its game (type and owner included) and organizer expanded.
///
/// `joined` reports whether the requesting gamer has signed up for the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub game: GameDto,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub organizer: GamerDto,
    pub joined: bool,
}

/// Body of `POST /events`. `organizer` is the organizing gamer's uid.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEventDto {
    pub game: i32,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub organizer: String,
}

/// Body of `PUT /events/{id}`. Unlike creation, `organizer` is the organizing gamer's ID.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateEventDto {
    pub game: i32,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub organizer: i32,
}

//! Event domain model and parameters.

use chrono::{NaiveDate, NaiveTime};

use crate::{
    model::event::{CreateEventDto, EventDto, UpdateEventDto},
    server::model::{game::Game, gamer::Gamer},
};

/// A scheduled play session for a game, organized by a gamer.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub game: Game,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub organizer: Gamer,
    /// Whether the viewing gamer has signed up. Never stored, always `false`
    /// when loaded from the repository until the service fills it in.
    pub joined: bool,
}

impl Event {
    /// Builds an event domain model from the entity and its already loaded relations.
    pub fn from_entity(entity: entity::event::Model, game: Game, organizer: Gamer) -> Self {
        Self {
            id: entity.id,
            game,
            description: entity.description,
            date: entity.date,
            time: entity.time,
            organizer,
            joined: false,
        }
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            game: self.game.into_dto(),
            description: self.description,
            date: self.date,
            time: self.time,
            organizer: self.organizer.into_dto(),
            joined: self.joined,
        }
    }
}

/// Parameters for creating an event.
///
/// The game is referenced by ID and the organizer by uid; the service resolves
/// both before writing.
#[derive(Debug, Clone)]
pub struct CreateEventParam {
    pub game_id: i32,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub organizer_uid: String,
}

impl From<CreateEventDto> for CreateEventParam {
    fn from(dto: CreateEventDto) -> Self {
        Self {
            game_id: dto.game,
            description: dto.description,
            date: dto.date,
            time: dto.time,
            organizer_uid: dto.organizer,
        }
    }
}

/// Parameters for replacing every field of an event. The organizer is referenced by ID.
#[derive(Debug, Clone)]
pub struct UpdateEventParam {
    pub game_id: i32,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub organizer_id: i32,
}

impl From<UpdateEventDto> for UpdateEventParam {
    fn from(dto: UpdateEventDto) -> Self {
        Self {
            game_id: dto.game,
            description: dto.description,
            date: dto.date,
            time: dto.time,
            organizer_id: dto.organizer,
        }
    }
}

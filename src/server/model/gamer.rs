//! Gamer domain model and registration parameters.

use crate::model::gamer::{GamerDto, RegisterGamerDto};

/// A registered player, identified by the uid clients send as their identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Gamer {
    pub id: i32,
    pub uid: String,
    pub bio: String,
}

impl Gamer {
    /// Converts an entity model to a gamer domain model at the repository boundary.
    pub fn from_entity(entity: entity::gamer::Model) -> Self {
        Self {
            id: entity.id,
            uid: entity.uid,
            bio: entity.bio,
        }
    }

    pub fn into_dto(self) -> GamerDto {
        GamerDto {
            id: self.id,
            uid: self.uid,
            bio: self.bio,
        }
    }
}

/// Parameters for registering a new gamer.
#[derive(Debug, Clone)]
pub struct RegisterGamerParam {
    pub uid: String,
    pub bio: String,
}

impl From<RegisterGamerDto> for RegisterGamerParam {
    fn from(dto: RegisterGamerDto) -> Self {
        Self {
            uid: dto.uid,
            bio: dto.bio,
        }
    }
}

//! Game type factory for creating test game type entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test game types.
pub struct GameTypeFactory<'a> {
    db: &'a DatabaseConnection,
    label: String,
}

impl<'a> GameTypeFactory<'a> {
    /// Creates a new GameTypeFactory labelled `"Game Type {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            label: format!("Game Type {}", next_id()),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub async fn build(self) -> Result<entity::game_type::Model, DbErr> {
        entity::game_type::ActiveModel {
            label: ActiveValue::Set(self.label),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game type with default values.
pub async fn create_game_type(db: &DatabaseConnection) -> Result<entity::game_type::Model, DbErr> {
    GameTypeFactory::new(db).build().await
}

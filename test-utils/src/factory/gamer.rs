//! Gamer factory for creating test gamer entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test gamers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::gamer::GamerFactory;
///
/// let gamer = GamerFactory::new(&db)
///     .uid("abc123")
///     .bio("Speedrunner")
///     .build()
///     .await?;
/// ```
pub struct GamerFactory<'a> {
    db: &'a DatabaseConnection,
    uid: String,
    bio: String,
}

impl<'a> GamerFactory<'a> {
    /// Creates a new GamerFactory with default values.
    ///
    /// Defaults:
    /// - uid: `"uid-{id}"` where id is auto-incremented
    /// - bio: `"Gamer {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            uid: format!("uid-{}", id),
            bio: format!("Gamer {}", id),
        }
    }

    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = uid.into();
        self
    }

    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    /// Builds and inserts the gamer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::gamer::Model)` - Created gamer entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::gamer::Model, DbErr> {
        entity::gamer::ActiveModel {
            uid: ActiveValue::Set(self.uid),
            bio: ActiveValue::Set(self.bio),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a gamer with default values.
///
/// Shorthand for `GamerFactory::new(db).build().await`.
pub async fn create_gamer(db: &DatabaseConnection) -> Result<entity::gamer::Model, DbErr> {
    GamerFactory::new(db).build().await
}

/// Creates a gamer with a specific uid.
///
/// Shorthand for `GamerFactory::new(db).uid(uid).build().await`.
pub async fn create_gamer_with_uid(
    db: &DatabaseConnection,
    uid: impl Into<String>,
) -> Result<entity::gamer::Model, DbErr> {
    GamerFactory::new(db).uid(uid).build().await
}

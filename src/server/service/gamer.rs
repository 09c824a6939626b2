use sea_orm::DatabaseConnection;

use crate::server::{
    data::gamer::GamerRepository,
    error::AppError,
    model::gamer::{Gamer, RegisterGamerParam},
};

pub struct GamerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GamerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a gamer for the uid.
    ///
    /// Registering a uid that already has a gamer returns the existing gamer unchanged.
    ///
    /// # Returns
    /// - `Ok((Gamer, true))` - A new gamer was created
    /// - `Ok((Gamer, false))` - The uid was already registered
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, param: RegisterGamerParam) -> Result<(Gamer, bool), AppError> {
        let repo = GamerRepository::new(self.db);

        if let Some(existing) = repo.find_by_uid(&param.uid).await? {
            return Ok((existing, false));
        }

        let gamer = repo.create(param).await?;

        tracing::info!("Registered gamer {} ({})", gamer.id, gamer.uid);

        Ok((gamer, true))
    }

    /// Looks up the gamer registered with `uid`, if any.
    pub async fn check_user(&self, uid: &str) -> Result<Option<Gamer>, AppError> {
        Ok(GamerRepository::new(self.db).find_by_uid(uid).await?)
    }
}

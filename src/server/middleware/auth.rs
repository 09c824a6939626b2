use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::gamer::GamerRepository,
    error::{auth::AuthError, AppError},
    model::gamer::Gamer,
};

/// Resolves the caller's identity from the raw `Authorization` header.
///
/// The header value is taken as a gamer uid as-is; no token is verified.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Requires a registered gamer behind the request.
    ///
    /// # Returns
    /// - `Ok(Gamer)` - The gamer whose uid matches the header
    /// - `Err(AuthError::MissingIdentity)` - No usable header was sent
    /// - `Err(AuthError::UnknownGamer)` - No gamer has the uid
    pub async fn require(&self) -> Result<Gamer, AppError> {
        match self.identify().await? {
            Some(gamer) => Ok(gamer),
            None => Err(AuthError::MissingIdentity.into()),
        }
    }

    /// Resolves the gamer behind the request when a header is present.
    ///
    /// # Returns
    /// - `Ok(Some(Gamer))` - The gamer whose uid matches the header
    /// - `Ok(None)` - No usable header was sent
    /// - `Err(AuthError::UnknownGamer)` - No gamer has the uid
    pub async fn identify(&self) -> Result<Option<Gamer>, AppError> {
        let Some(uid) = self.uid() else {
            return Ok(None);
        };

        let Some(gamer) = GamerRepository::new(self.db).find_by_uid(uid).await? else {
            return Err(AuthError::UnknownGamer(uid.to_string()).into());
        };

        Ok(Some(gamer))
    }

    fn uid(&self) -> Option<&str> {
        self.headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|uid| !uid.is_empty())
    }
}

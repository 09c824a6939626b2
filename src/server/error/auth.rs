use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::MessageDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no `Authorization` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing the Authorization header")]
    MissingIdentity,

    /// The `Authorization` header names a uid that no gamer is registered with.
    ///
    /// Results in a 404 Not Found response.
    #[error("No gamer registered with uid {0}")]
    UnknownGamer(String),
}

/// Converts identity errors into HTTP responses.
///
/// - `MissingIdentity` → 401 Unauthorized
/// - `UnknownGamer` → 404 Not Found with "Gamer not found"
///
/// Both are logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingIdentity => (
                StatusCode::UNAUTHORIZED,
                Json(MessageDto {
                    message: "Authorization header required".to_string(),
                }),
            )
                .into_response(),
            Self::UnknownGamer(_) => (
                StatusCode::NOT_FOUND,
                Json(MessageDto {
                    message: "Gamer not found".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

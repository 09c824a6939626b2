use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GamerDto {
    pub id: i32,
    pub uid: String,
    pub bio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterGamerDto {
    pub uid: String,
    pub bio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckUserDto {
    pub uid: String,
}

/// Result of a `checkuser` lookup.
///
/// Serializes to the gamer itself when the uid is registered, otherwise to
/// `{"valid": false}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CheckUserResultDto {
    Registered(GamerDto),
    Unregistered { valid: bool },
}

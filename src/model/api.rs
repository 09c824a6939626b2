use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body carrying a human readable message, used for errors and action acknowledgements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

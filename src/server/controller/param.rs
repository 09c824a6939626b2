use serde::Deserialize;

/// Query parameters accepted by `GET /games`.
#[derive(Debug, Default, Deserialize)]
pub struct GameFilterParam {
    #[serde(rename = "type")]
    pub game_type: Option<i32>,
}

/// Query parameters accepted by `GET /events`.
#[derive(Debug, Default, Deserialize)]
pub struct EventFilterParam {
    pub game: Option<i32>,
}

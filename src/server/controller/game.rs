use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        game::{CreateGameDto, GameDto, UpdateGameDto},
    },
    server::{
        controller::{
            extract::{AppJson, AppPath, AppQuery},
            param::GameFilterParam,
        },
        error::AppError,
        model::game::{CreateGameParam, UpdateGameParam},
        service::game::GameService,
        state::AppState,
    },
};

pub static GAME_TAG: &str = "game";

#[utoipa::path(
    get,
    path = "/games",
    tag = GAME_TAG,
    params(
        ("type" = Option<i32>, Query, description = "Only return games of this game type")
    ),
    responses(
        (status = 200, description = "Successfully retrieved games", body = Vec<GameDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_games(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<GameFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let games = GameService::new(&state.db).list(filter.game_type).await?;

    let dto: Vec<GameDto> = games.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved game", body = GameDto),
        (status = 404, description = "Game not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let game = GameService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Game not found".to_string()))?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

#[utoipa::path(
    post,
    path = "/games",
    tag = GAME_TAG,
    request_body = CreateGameDto,
    responses(
        (status = 200, description = "Successfully created game", body = GameDto),
        (status = 404, description = "Owner or game type not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let game = GameService::new(&state.db)
        .create(CreateGameParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

#[utoipa::path(
    put,
    path = "/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    request_body = UpdateGameDto,
    responses(
        (status = 204, description = "Successfully updated game"),
        (status = 404, description = "Game or game type not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_game(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    GameService::new(&state.db)
        .update(id, UpdateGameParam::from(payload))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted game"),
        (status = 404, description = "Game not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_game(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = GameService::new(&state.db).delete(id).await?;

    if !deleted {
        return Err(AppError::NotFound("Game not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

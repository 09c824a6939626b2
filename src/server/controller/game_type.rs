use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        game_type::{CreateGameTypeDto, GameTypeDto, UpdateGameTypeDto},
    },
    server::{
        controller::extract::{AppJson, AppPath},
        error::AppError,
        model::game_type::{CreateGameTypeParam, UpdateGameTypeParam},
        service::game_type::GameTypeService,
        state::AppState,
    },
};

pub static GAME_TYPE_TAG: &str = "game_type";

#[utoipa::path(
    get,
    path = "/gametypes",
    tag = GAME_TYPE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved game types", body = Vec<GameTypeDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_game_types(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let game_types = GameTypeService::new(&state.db).list().await?;

    let dto: Vec<GameTypeDto> = game_types.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/gametypes/{id}",
    tag = GAME_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Game type ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved game type", body = GameTypeDto),
        (status = 404, description = "Game type not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_game_type(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let game_type = GameTypeService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Game type not found".to_string()))?;

    Ok((StatusCode::OK, Json(game_type.into_dto())))
}

#[utoipa::path(
    post,
    path = "/gametypes",
    tag = GAME_TYPE_TAG,
    request_body = CreateGameTypeDto,
    responses(
        (status = 201, description = "Successfully created game type", body = GameTypeDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_game_type(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateGameTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let game_type = GameTypeService::new(&state.db)
        .create(CreateGameTypeParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(game_type.into_dto())))
}

#[utoipa::path(
    put,
    path = "/gametypes/{id}",
    tag = GAME_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Game type ID")
    ),
    request_body = UpdateGameTypeDto,
    responses(
        (status = 204, description = "Successfully updated game type"),
        (status = 404, description = "Game type not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_game_type(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateGameTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    GameTypeService::new(&state.db)
        .update(id, UpdateGameTypeParam::from(payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Game type not found".to_string()))?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/gametypes/{id}",
    tag = GAME_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Game type ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted game type"),
        (status = 404, description = "Game type not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_game_type(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = GameTypeService::new(&state.db).delete(id).await?;

    if !deleted {
        return Err(AppError::NotFound("Game type not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

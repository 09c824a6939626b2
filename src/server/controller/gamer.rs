use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::MessageDto,
        gamer::{CheckUserDto, CheckUserResultDto, GamerDto, RegisterGamerDto},
    },
    server::{
        controller::extract::AppJson, error::AppError, model::gamer::RegisterGamerParam,
        service::gamer::GamerService, state::AppState,
    },
};

pub static GAMER_TAG: &str = "gamer";

#[utoipa::path(
    post,
    path = "/register",
    tag = GAMER_TAG,
    request_body = RegisterGamerDto,
    responses(
        (status = 201, description = "Successfully registered gamer", body = GamerDto),
        (status = 200, description = "Uid was already registered", body = GamerDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn register_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterGamerDto>,
) -> Result<impl IntoResponse, AppError> {
    let (gamer, created) = GamerService::new(&state.db)
        .register(RegisterGamerParam::from(payload))
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(gamer.into_dto())))
}

#[utoipa::path(
    post,
    path = "/checkuser",
    tag = GAMER_TAG,
    request_body = CheckUserDto,
    responses(
        (status = 200, description = "The registered gamer, or {\"valid\": false}", body = CheckUserResultDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn check_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CheckUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let result = match GamerService::new(&state.db)
        .check_user(&payload.uid)
        .await?
    {
        Some(gamer) => CheckUserResultDto::Registered(gamer.into_dto()),
        None => CheckUserResultDto::Unregistered { valid: false },
    };

    Ok((StatusCode::OK, Json(result)))
}

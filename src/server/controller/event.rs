use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        event::{CreateEventDto, EventDto, UpdateEventDto},
    },
    server::{
        controller::{
            extract::{AppJson, AppPath, AppQuery},
            param::EventFilterParam,
        },
        error::AppError,
        middleware::auth::AuthGuard,
        model::event::{CreateEventParam, UpdateEventParam},
        service::event::EventService,
        state::AppState,
    },
};

pub static EVENT_TAG: &str = "event";

#[utoipa::path(
    get,
    path = "/events",
    tag = EVENT_TAG,
    params(
        ("game" = Option<i32>, Query, description = "Only return events for this game"),
        ("Authorization" = Option<String>, Header, description = "Uid of the viewing gamer, used to compute `joined`")
    ),
    responses(
        (status = 200, description = "Successfully retrieved events", body = Vec<EventDto>),
        (status = 404, description = "Viewing gamer not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(filter): AppQuery<EventFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &headers).identify().await?;

    let events = EventService::new(&state.db)
        .list(filter.game, viewer.as_ref())
        .await?;

    let dto: Vec<EventDto> = events.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID"),
        ("Authorization" = Option<String>, Header, description = "Uid of the viewing gamer, used to compute `joined`")
    ),
    responses(
        (status = 200, description = "Successfully retrieved event", body = EventDto),
        (status = 404, description = "Event or viewing gamer not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &headers).identify().await?;

    let event = EventService::new(&state.db)
        .get_by_id(id, viewer.as_ref())
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

#[utoipa::path(
    post,
    path = "/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Successfully created event", body = EventDto),
        (status = 404, description = "Game or organizer not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db)
        .create(CreateEventParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

#[utoipa::path(
    put,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = UpdateEventDto,
    responses(
        (status = 204, description = "Successfully updated event"),
        (status = 404, description = "Event, game or organizer not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    EventService::new(&state.db)
        .update(id, UpdateEventParam::from(payload))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted event"),
        (status = 404, description = "Event not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = EventService::new(&state.db).delete(id).await?;

    if !deleted {
        return Err(AppError::NotFound("Event not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/events/{id}/signup",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID"),
        ("Authorization" = String, Header, description = "Uid of the gamer signing up")
    ),
    responses(
        (status = 201, description = "Gamer signed up for the event", body = MessageDto),
        (status = 401, description = "Authorization header missing", body = MessageDto),
        (status = 404, description = "Event or gamer not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let gamer = AuthGuard::new(&state.db, &headers).require().await?;

    EventService::new(&state.db).signup(id, &gamer).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "Gamer added".to_string(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/events/{id}/leave",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID"),
        ("Authorization" = String, Header, description = "Uid of the gamer leaving")
    ),
    responses(
        (status = 204, description = "Gamer no longer attends the event"),
        (status = 401, description = "Authorization header missing", body = MessageDto),
        (status = 404, description = "Event or gamer not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn leave(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let gamer = AuthGuard::new(&state.db, &headers).require().await?;

    EventService::new(&state.db).leave(id, &gamer).await?;

    Ok(StatusCode::NO_CONTENT)
}

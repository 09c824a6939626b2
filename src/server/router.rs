use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::MessageDto,
        event::{CreateEventDto, EventDto, UpdateEventDto},
        game::{CreateGameDto, GameDto, UpdateGameDto},
        game_type::{CreateGameTypeDto, GameTypeDto, UpdateGameTypeDto},
        gamer::{CheckUserDto, CheckUserResultDto, GamerDto, RegisterGamerDto},
    },
    server::{
        controller::{
            event::{
                self, create_event, delete_event, get_event, leave, list_events, signup,
                update_event,
            },
            game::{self, create_game, delete_game, get_game, list_games, update_game},
            game_type::{
                self, create_game_type, delete_game_type, get_game_type, list_game_types,
                update_game_type,
            },
            gamer::{self, check_user, register_user},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "LevelUp API", description = "Gaming event tracker"),
    paths(
        gamer::register_user,
        gamer::check_user,
        game_type::list_game_types,
        game_type::get_game_type,
        game_type::create_game_type,
        game_type::update_game_type,
        game_type::delete_game_type,
        game::list_games,
        game::get_game,
        game::create_game,
        game::update_game,
        game::delete_game,
        event::list_events,
        event::get_event,
        event::create_event,
        event::update_event,
        event::delete_event,
        event::signup,
        event::leave,
    ),
    components(schemas(
        MessageDto,
        GamerDto,
        RegisterGamerDto,
        CheckUserDto,
        CheckUserResultDto,
        GameTypeDto,
        CreateGameTypeDto,
        UpdateGameTypeDto,
        GameDto,
        CreateGameDto,
        UpdateGameDto,
        EventDto,
        CreateEventDto,
        UpdateEventDto,
    )),
    tags(
        (name = "gamer", description = "Gamer registration"),
        (name = "game_type", description = "Game type management"),
        (name = "game", description = "Game catalogue"),
        (name = "event", description = "Events and attendance"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_user))
        .route("/checkuser", post(check_user))
        .route("/gametypes", get(list_game_types).post(create_game_type))
        .route(
            "/gametypes/{id}",
            get(get_game_type)
                .put(update_game_type)
                .delete(delete_game_type),
        )
        .route("/games", get(list_games).post(create_game))
        .route(
            "/games/{id}",
            get(get_game).put(update_game).delete(delete_game),
        )
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/events/{id}/signup", post(signup))
        .route("/events/{id}/leave", delete(leave))
        .route("/api/docs/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

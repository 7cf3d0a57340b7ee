//! Video game catalogue handlers.
//!
//! Mounted under `/api/v1/games` behind the session guard; every request
//! reaching these handlers is already authenticated.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::domain::{Error, GameDraft, GameId, GameTitle, TitleValidationError, VideoGame};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for creating or replacing a game.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameRequest {
    #[schema(example = "Hollow Knight")]
    pub title: String,
    #[schema(example = "PC")]
    pub platform: String,
    #[schema(example = "Team Cherry")]
    pub developer: String,
    #[schema(example = "Team Cherry")]
    pub publisher: String,
}

/// A catalogued game as returned to clients.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub id: Uuid,
    pub title: String,
    pub platform: String,
    pub developer: String,
    pub publisher: String,
}

impl From<VideoGame> for GameResponse {
    fn from(game: VideoGame) -> Self {
        Self {
            id: game.id().as_uuid(),
            title: game.title().to_string(),
            platform: game.platform().to_owned(),
            developer: game.developer().to_owned(),
            publisher: game.publisher().to_owned(),
        }
    }
}

fn map_title_error(err: TitleValidationError) -> Error {
    let code = match err {
        TitleValidationError::Empty => "empty_title",
        TitleValidationError::TooLong => "title_too_long",
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": "title", "code": code }))
}

impl TryFrom<GameRequest> for GameDraft {
    type Error = Error;

    fn try_from(value: GameRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            title: GameTitle::new(value.title).map_err(map_title_error)?,
            platform: value.platform,
            developer: value.developer,
            publisher: value.publisher,
        })
    }
}

/// List all catalogued games.
#[utoipa::path(
    get,
    path = "/api/v1/games",
    responses(
        (status = 200, description = "Catalogued games", body = [GameResponse]),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["games"],
    operation_id = "listGames"
)]
#[get("")]
pub async fn list_games(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<GameResponse>>> {
    let games = state.games().list().await?;
    Ok(web::Json(games.into_iter().map(GameResponse::from).collect()))
}

/// Fetch a single game by id.
#[utoipa::path(
    get,
    path = "/api/v1/games/{id}",
    params(("id" = Uuid, Path, description = "Game identifier")),
    responses(
        (status = 200, description = "The game", body = GameResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Unknown game", body = Error)
    ),
    tags = ["games"],
    operation_id = "getGame"
)]
#[get("/{id}")]
pub async fn get_game(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> ApiResult<web::Json<GameResponse>> {
    let id = GameId::from_uuid(id.into_inner());
    let game = state
        .games()
        .find(id)
        .await?
        .ok_or_else(|| Error::not_found(format!("no game with id {id}")))?;
    Ok(web::Json(game.into()))
}

/// Add a game to the catalogue.
#[utoipa::path(
    post,
    path = "/api/v1/games",
    request_body = GameRequest,
    responses(
        (status = 201, description = "Game created", body = GameResponse,
            headers(("Location" = String, description = "URL of the new game"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["games"],
    operation_id = "createGame"
)]
#[post("")]
pub async fn create_game(
    state: web::Data<HttpState>,
    payload: web::Json<GameRequest>,
) -> ApiResult<HttpResponse> {
    let draft = GameDraft::try_from(payload.into_inner())?;
    let game = state.games().create(draft).await?;
    let location = format!("/api/v1/games/{}", game.id());
    Ok(HttpResponse::Created()
        .insert_header((actix_web::http::header::LOCATION, location))
        .json(GameResponse::from(game)))
}

/// Replace an existing game's attributes.
#[utoipa::path(
    put,
    path = "/api/v1/games/{id}",
    params(("id" = Uuid, Path, description = "Game identifier")),
    request_body = GameRequest,
    responses(
        (status = 200, description = "Updated game", body = GameResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Unknown game", body = Error)
    ),
    tags = ["games"],
    operation_id = "updateGame"
)]
#[put("/{id}")]
pub async fn update_game(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
    payload: web::Json<GameRequest>,
) -> ApiResult<web::Json<GameResponse>> {
    let id = GameId::from_uuid(id.into_inner());
    let draft = GameDraft::try_from(payload.into_inner())?;
    let game = state
        .games()
        .update(id, draft)
        .await?
        .ok_or_else(|| Error::not_found(format!("no game with id {id}")))?;
    Ok(web::Json(game.into()))
}

/// Remove a game from the catalogue.
#[utoipa::path(
    delete,
    path = "/api/v1/games/{id}",
    params(("id" = Uuid, Path, description = "Game identifier")),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Unknown game", body = Error)
    ),
    tags = ["games"],
    operation_id = "deleteGame"
)]
#[delete("/{id}")]
pub async fn delete_game(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let id = GameId::from_uuid(id.into_inner());
    if state.games().delete(id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(Error::not_found(format!("no game with id {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InMemoryGamesRepository;
    use actix_web::{App, http::StatusCode, test as actix_test, web};
    use serde_json::Value;
    use std::sync::Arc;

    fn sample_request() -> GameRequest {
        GameRequest {
            title: "Hollow Knight".into(),
            platform: "PC".into(),
            developer: "Team Cherry".into(),
            publisher: "Team Cherry".into(),
        }
    }

    fn games_test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = web::Data::new(HttpState::new(Arc::new(InMemoryGamesRepository::new())));
        App::new().app_data(state).service(
            web::scope("/api/v1/games")
                .service(list_games)
                .service(get_game)
                .service(create_game)
                .service(update_game)
                .service(delete_game),
        )
    }

    #[actix_web::test]
    async fn create_returns_location_and_body() {
        let app = actix_test::init_service(games_test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/games")
                .set_json(sample_request())
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let location = res
            .headers()
            .get("location")
            .expect("location header")
            .to_str()
            .expect("ascii header")
            .to_owned();
        let body: GameResponse = actix_test::read_body_json(res).await;
        assert_eq!(location, format!("/api/v1/games/{}", body.id));
        assert_eq!(body.title, "Hollow Knight");
    }

    #[actix_web::test]
    async fn create_rejects_blank_title() {
        let app = actix_test::init_service(games_test_app()).await;
        let mut request = sample_request();
        request.title = "   ".into();
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/games")
                .set_json(request)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            body.get("details")
                .and_then(|d| d.get("code"))
                .and_then(Value::as_str),
            Some("empty_title")
        );
    }

    #[actix_web::test]
    async fn fetch_unknown_game_is_not_found() {
        let app = actix_test::init_service(games_test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/api/v1/games/{}", Uuid::new_v4()))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn update_replaces_all_attributes() {
        let app = actix_test::init_service(games_test_app()).await;
        let created: GameResponse = actix_test::read_body_json(
            actix_test::call_service(
                &app,
                actix_test::TestRequest::post()
                    .uri("/api/v1/games")
                    .set_json(sample_request())
                    .to_request(),
            )
            .await,
        )
        .await;

        let mut replacement = sample_request();
        replacement.title = "Silksong".into();
        replacement.platform = "Switch".into();
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri(&format!("/api/v1/games/{}", created.id))
                .set_json(replacement)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: GameResponse = actix_test::read_body_json(res).await;
        assert_eq!(body.id, created.id);
        assert_eq!(body.title, "Silksong");
        assert_eq!(body.platform, "Switch");
    }

    #[actix_web::test]
    async fn delete_then_list_is_empty() {
        let app = actix_test::init_service(games_test_app()).await;
        let created: GameResponse = actix_test::read_body_json(
            actix_test::call_service(
                &app,
                actix_test::TestRequest::post()
                    .uri("/api/v1/games")
                    .set_json(sample_request())
                    .to_request(),
            )
            .await,
        )
        .await;

        let delete_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/v1/games/{}", created.id))
                .to_request(),
        )
        .await;
        assert_eq!(delete_res.status(), StatusCode::NO_CONTENT);

        let list_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/games")
                .to_request(),
        )
        .await;
        let body: Vec<GameResponse> = actix_test::read_body_json(list_res).await;
        assert!(body.is_empty());
    }
}

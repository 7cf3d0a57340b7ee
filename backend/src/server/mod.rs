//! Server construction and middleware wiring.
//!
//! The pipeline order is fixed and significant: tracing wraps everything,
//! HTTPS redirection runs before any route dispatch, the cookie session is
//! decoded next, and the authorization guard rejects unauthenticated
//! requests to the games scope before their handlers run.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Environment;
use crate::doc::ApiDoc;
use crate::domain::{GamesRepository, InMemoryGamesRepository};
use crate::inbound::http::games::{create_game, delete_game, get_game, list_games, update_game};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::login;
use crate::middleware::{HttpsRedirect, RequireSession, Trace};
use crate::outbound::persistence::DieselGamesRepository;

/// Build the games repository from configuration: database-backed when a
/// pool is attached, in-memory fixture otherwise.
fn build_games_repository(config: &ServerConfig) -> Arc<dyn GamesRepository> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselGamesRepository::new(pool.clone())),
        None => Arc::new(InMemoryGamesRepository::new()),
    }
}

/// Everything the per-worker application factory needs.
#[derive(Clone)]
pub struct AppDependencies {
    /// Shared readiness state.
    pub health_state: web::Data<HealthState>,
    /// Handler dependencies.
    pub http_state: web::Data<HttpState>,
    /// Session cookie signing key.
    pub key: Key,
    /// Whether session cookies are marked `Secure`.
    pub cookie_secure: bool,
    /// Runtime environment resolved at startup.
    pub environment: Environment,
}

/// Assemble the application with the fixed middleware pipeline.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        environment,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .build();

    let games = web::scope("/games")
        .wrap(RequireSession)
        .service(list_games)
        .service(get_game)
        .service(create_game)
        .service(update_game)
        .service(delete_game);

    let api = web::scope("/api/v1")
        .wrap(session)
        .service(login)
        .service(games);

    let mut app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(HttpsRedirect)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    if environment.is_development() {
        app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    app
}

/// Construct the HTTP server from the provided configuration.
///
/// Binds the listener and flips the health state to *Serving*; the returned
/// [`Server`] must be awaited to drive connections.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let games = build_games_repository(&config);
    let http_state = web::Data::new(HttpState::new(games));
    let server_health_state = health_state.clone();
    let ServerConfig {
        key,
        cookie_secure,
        bind_addr,
        environment,
        db_pool: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            environment,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

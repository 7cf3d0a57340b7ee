//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the specification served by Swagger UI in
//! development runs and exported via `cargo run --bin openapi-dump` for
//! external tooling.

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::games::{GameRequest, GameResponse};
use crate::inbound::http::users::LoginRequest;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the video game catalogue API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Video game catalogue API",
        description = "Session-authenticated CRUD over a video game catalogue, plus health probes.",
        license(name = "MIT OR Apache-2.0")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::games::list_games,
        crate::inbound::http::games::get_game,
        crate::inbound::http::games::create_game,
        crate::inbound::http::games::update_game,
        crate::inbound::http::games::delete_game,
        crate::inbound::http::users::login,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(GameRequest, GameResponse, LoginRequest, Error, ErrorCode)),
    tags(
        (name = "games", description = "Video game catalogue operations"),
        (name = "auth", description = "Session establishment"),
        (name = "health", description = "Probes for orchestration")
    )
)]
pub struct ApiDoc;

//! Service entry-point: resolve configuration, build the database pool, and
//! start the HTTP server.
//!
//! Startup is fail-fast: a missing connection string or an unreachable
//! database aborts the process before the listener is bound.

use actix_web::web;
use mockable::DefaultEnv;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use videogame_api::config::AppConfig;
use videogame_api::inbound::http::health::HealthState;
use videogame_api::outbound::persistence::{DbPool, PoolConfig};
use videogame_api::server::{self, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let env = DefaultEnv::default();
    let config = AppConfig::from_env(&env).map_err(|err| {
        error!(error = %err, "fatal configuration error");
        std::io::Error::other(err.to_string())
    })?;

    let pool = DbPool::new(PoolConfig::new(&config.connection_string))
        .await
        .map_err(|err| {
            error!(error = %err, "failed to initialise database pool");
            std::io::Error::other(err.to_string())
        })?;

    let health_state = web::Data::new(HealthState::new());
    let server_config = ServerConfig::new(
        config.session.key,
        config.session.cookie_secure,
        config.bind_addr,
        config.environment,
    )
    .with_db_pool(pool);

    let server = server::create_server(health_state, server_config)?;
    info!(addr = %config.bind_addr, environment = ?config.environment, "server listening");
    server.await
}

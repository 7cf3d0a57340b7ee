//! HTTP server configuration object.

use actix_web::cookie::Key;
use std::net::SocketAddr;

use crate::config::Environment;
use crate::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) environment: Environment,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration from resolved application settings.
    #[must_use]
    pub fn new(
        key: Key,
        cookie_secure: bool,
        bind_addr: SocketAddr,
        environment: Environment,
    ) -> Self {
        Self {
            key,
            cookie_secure,
            bind_addr,
            environment,
            db_pool: None,
        }
    }

    /// Attach the database pool backing the games repository.
    ///
    /// Without a pool the server falls back to the in-memory repository,
    /// which is intended for tests and local experiments only.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}

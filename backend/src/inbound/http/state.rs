//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they depend only on
//! domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::GamesRepository;

/// Dependencies available to HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    games: Arc<dyn GamesRepository>,
}

impl HttpState {
    /// Build state around a games repository implementation.
    #[must_use]
    pub fn new(games: Arc<dyn GamesRepository>) -> Self {
        Self { games }
    }

    /// The games repository port.
    #[must_use]
    pub fn games(&self) -> &Arc<dyn GamesRepository> {
        &self.games
    }
}

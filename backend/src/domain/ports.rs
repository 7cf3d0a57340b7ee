//! Ports implemented by outbound adapters.
//!
//! The HTTP layer depends on these traits only, so handlers stay testable
//! without a live database. [`InMemoryGamesRepository`] is the fallback
//! adapter used when no connection pool is configured (tests, local runs).

use std::sync::Mutex;

use async_trait::async_trait;

use super::{Error, GameDraft, GameId, VideoGame};

/// Persistence port for the video game catalogue.
#[async_trait]
pub trait GamesRepository: Send + Sync {
    /// Return all catalogued games.
    async fn list(&self) -> Result<Vec<VideoGame>, Error>;

    /// Find a game by id, if present.
    async fn find(&self, id: GameId) -> Result<Option<VideoGame>, Error>;

    /// Store a new game and return it with its assigned id.
    async fn create(&self, draft: GameDraft) -> Result<VideoGame, Error>;

    /// Replace an existing game's attributes. `None` when the id is unknown.
    async fn update(&self, id: GameId, draft: GameDraft) -> Result<Option<VideoGame>, Error>;

    /// Remove a game. Returns whether a record was deleted.
    async fn delete(&self, id: GameId) -> Result<bool, Error>;
}

/// In-memory repository preserving insertion order.
#[derive(Default)]
pub struct InMemoryGamesRepository {
    games: Mutex<Vec<VideoGame>>,
}

impl InMemoryGamesRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_games<T>(&self, f: impl FnOnce(&mut Vec<VideoGame>) -> T) -> Result<T, Error> {
        let mut games = self
            .games
            .lock()
            .map_err(|_| Error::internal("games store lock poisoned"))?;
        Ok(f(&mut games))
    }
}

#[async_trait]
impl GamesRepository for InMemoryGamesRepository {
    async fn list(&self) -> Result<Vec<VideoGame>, Error> {
        self.with_games(|games| games.clone())
    }

    async fn find(&self, id: GameId) -> Result<Option<VideoGame>, Error> {
        self.with_games(|games| games.iter().find(|game| game.id() == id).cloned())
    }

    async fn create(&self, draft: GameDraft) -> Result<VideoGame, Error> {
        let game = VideoGame::from_draft(GameId::random(), draft);
        self.with_games(|games| {
            games.push(game.clone());
            game
        })
    }

    async fn update(&self, id: GameId, draft: GameDraft) -> Result<Option<VideoGame>, Error> {
        self.with_games(|games| {
            games.iter_mut().find(|game| game.id() == id).map(|slot| {
                *slot = VideoGame::from_draft(id, draft);
                slot.clone()
            })
        })
    }

    async fn delete(&self, id: GameId) -> Result<bool, Error> {
        self.with_games(|games| {
            let before = games.len();
            games.retain(|game| game.id() != id);
            games.len() < before
        })
    }
}

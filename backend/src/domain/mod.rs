//! Transport-agnostic domain types and ports.
//!
//! Inbound adapters map these types onto HTTP; outbound adapters implement
//! the ports against PostgreSQL. Nothing in this module depends on Actix or
//! Diesel.

pub mod error;
pub mod game;
pub mod ports;

pub use self::error::{Error, ErrorCode};
pub use self::game::{GameDraft, GameId, GameTitle, TitleValidationError, VideoGame};
pub use self::ports::{GamesRepository, InMemoryGamesRepository};

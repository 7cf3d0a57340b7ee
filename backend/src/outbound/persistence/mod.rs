//! PostgreSQL persistence adapters built on Diesel.

pub mod diesel_games_repository;
mod models;
pub mod pool;
pub mod schema;

pub use diesel_games_repository::DieselGamesRepository;
pub use pool::{DbPool, PoolConfig, PoolError};

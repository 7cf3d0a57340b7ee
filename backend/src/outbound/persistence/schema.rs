//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the deployed schema exactly; Diesel uses
//! them for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Video game catalogue table.
    video_games (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Game title (non-empty, max 200 characters).
        title -> Varchar,
        /// Platform the game runs on.
        platform -> Varchar,
        /// Studio that developed the game.
        developer -> Varchar,
        /// Publisher of record.
        publisher -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

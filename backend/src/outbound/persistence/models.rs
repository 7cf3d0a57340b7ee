//! Internal Diesel row structs for database operations.
//!
//! Implementation details of the persistence layer; never exposed to the
//! domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::video_games;

/// Row struct for reading from the video_games table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = video_games)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct VideoGameRow {
    pub id: Uuid,
    pub title: String,
    pub platform: String,
    pub developer: String,
    pub publisher: String,
    #[expect(dead_code, reason = "schema field read for audit tooling only")]
    pub created_at: DateTime<Utc>,
    #[expect(dead_code, reason = "schema field read for audit tooling only")]
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating game records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = video_games)]
pub(crate) struct NewVideoGameRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub platform: &'a str,
    pub developer: &'a str,
    pub publisher: &'a str,
}

/// Changeset struct for replacing a game's attributes.
///
/// Carries a fresh `updated_at` so the modification timestamp advances with
/// every update; there is no database trigger doing it.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = video_games)]
pub(crate) struct VideoGameChangeset<'a> {
    pub title: &'a str,
    pub platform: &'a str,
    pub developer: &'a str,
    pub publisher: &'a str,
    pub updated_at: DateTime<Utc>,
}

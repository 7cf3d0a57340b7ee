//! Diesel-backed implementation of the games repository port.
//!
//! Each operation checks out its own pooled connection, so repository calls
//! are request-scoped even though the pool handle itself is process-wide.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::{Error, GameDraft, GameId, GameTitle, GamesRepository, VideoGame};

use super::models::{NewVideoGameRow, VideoGameChangeset, VideoGameRow};
use super::pool::{DbPool, PoolError};
use super::schema::video_games;

/// Games repository persisting to PostgreSQL.
#[derive(Clone)]
pub struct DieselGamesRepository {
    pool: DbPool,
}

impl DieselGamesRepository {
    /// Create a repository over the given pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> Error {
    Error::service_unavailable(error.to_string())
}

fn map_query_error(error: diesel::result::Error) -> Error {
    Error::internal(format!("database query failed: {error}"))
}

fn changeset_for(draft: &GameDraft, updated_at: DateTime<Utc>) -> VideoGameChangeset<'_> {
    VideoGameChangeset {
        title: draft.title.as_ref(),
        platform: &draft.platform,
        developer: &draft.developer,
        publisher: &draft.publisher,
        updated_at,
    }
}

fn row_to_domain(row: VideoGameRow) -> Result<VideoGame, Error> {
    let title = GameTitle::new(row.title)
        .map_err(|err| Error::internal(format!("stored title is invalid: {err}")))?;
    Ok(VideoGame::from_draft(
        GameId::from_uuid(row.id),
        GameDraft {
            title,
            platform: row.platform,
            developer: row.developer,
            publisher: row.publisher,
        },
    ))
}

#[async_trait]
impl GamesRepository for DieselGamesRepository {
    async fn list(&self) -> Result<Vec<VideoGame>, Error> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = video_games::table
            .select(VideoGameRow::as_select())
            .order(video_games::title.asc())
            .load(&mut conn)
            .await
            .map_err(map_query_error)?;
        rows.into_iter().map(row_to_domain).collect()
    }

    async fn find(&self, id: GameId) -> Result<Option<VideoGame>, Error> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = video_games::table
            .find(id.as_uuid())
            .select(VideoGameRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_query_error)?;
        row.map(row_to_domain).transpose()
    }

    async fn create(&self, draft: GameDraft) -> Result<VideoGame, Error> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewVideoGameRow {
            id: Uuid::new_v4(),
            title: draft.title.as_ref(),
            platform: &draft.platform,
            developer: &draft.developer,
            publisher: &draft.publisher,
        };
        let inserted = diesel::insert_into(video_games::table)
            .values(&row)
            .returning(VideoGameRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_query_error)?;
        row_to_domain(inserted)
    }

    async fn update(&self, id: GameId, draft: GameDraft) -> Result<Option<VideoGame>, Error> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = changeset_for(&draft, Utc::now());
        let updated = diesel::update(video_games::table.find(id.as_uuid()))
            .set(&changes)
            .returning(VideoGameRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_query_error)?;
        updated.map(row_to_domain).transpose()
    }

    async fn delete(&self, id: GameId) -> Result<bool, Error> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(video_games::table.find(id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_query_error)?;
        Ok(deleted > 0)
    }
}

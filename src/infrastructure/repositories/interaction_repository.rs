use crate::domain::interaction::{EngagementCounts, InteractionLookup};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use sqlx::FromRow;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// What a published feed item points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedItemKind {
    Rss,
    Post(Uuid),
}

#[derive(Debug, FromRow)]
struct EngagementRow {
    feed_item_id: Uuid,
    #[sqlx(flatten)]
    counts: EngagementCounts,
}

pub struct InteractionRepository {
    pool: Arc<DbPool>,
}

impl InteractionRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Kind of a published feed item, `None` when it does not exist
    pub async fn find_kind(&self, item_id: Uuid) -> AppResult<Option<FeedItemKind>> {
        let pool = self.pool.as_ref();
        let post_id = sqlx::query_scalar::<_, Option<Uuid>>(
            r#"
            SELECT post_id
            FROM feed_items
            WHERE id = $1 AND is_published
            "#,
        )
        .bind(item_id)
        .fetch_optional(pool)
        .await?;

        Ok(post_id.map(|post_id| match post_id {
            Some(post_id) => FeedItemKind::Post(post_id),
            None => FeedItemKind::Rss,
        }))
    }

    /// Remove the like if present, otherwise add it. Returns the new state.
    pub async fn toggle_like(&self, user_id: Uuid, item_id: Uuid) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM likes WHERE user_id = $1 AND feed_item_id = $2")
            .bind(user_id)
            .bind(item_id)
            .execute(&mut *tx)
            .await?;

        if removed.rows_affected() == 0 {
            sqlx::query(
                r#"
                INSERT INTO likes (id, user_id, feed_item_id, created_at)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (user_id, feed_item_id) DO NOTHING
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(item_id)
            .bind(chrono::Utc::now())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(removed.rows_affected() == 0)
    }

    /// Remove the bookmark if present, otherwise add it. Returns the new state.
    pub async fn toggle_bookmark(&self, user_id: Uuid, item_id: Uuid) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;

        let removed =
            sqlx::query("DELETE FROM bookmarks WHERE user_id = $1 AND feed_item_id = $2")
                .bind(user_id)
                .bind(item_id)
                .execute(&mut *tx)
                .await?;

        if removed.rows_affected() == 0 {
            sqlx::query(
                r#"
                INSERT INTO bookmarks (id, user_id, feed_item_id, created_at)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (user_id, feed_item_id) DO NOTHING
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(item_id)
            .bind(chrono::Utc::now())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(removed.rows_affected() == 0)
    }

    /// Delete a bookmark, returning whether one existed
    pub async fn remove_bookmark(&self, user_id: Uuid, item_id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query("DELETE FROM bookmarks WHERE user_id = $1 AND feed_item_id = $2")
            .bind(user_id)
            .bind(item_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn record_share(&self, user_id: Uuid, post_id: Uuid) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query(
            r#"
            INSERT INTO post_shares (id, user_id, post_id, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(post_id)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl InteractionLookup for InteractionRepository {
    async fn liked_among(&self, viewer_id: Uuid, item_ids: &[Uuid]) -> AppResult<Vec<Uuid>> {
        let pool = self.pool.as_ref();
        let liked = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT feed_item_id
            FROM likes
            WHERE user_id = $1 AND feed_item_id = ANY($2)
            "#,
        )
        .bind(viewer_id)
        .bind(item_ids)
        .fetch_all(pool)
        .await?;

        Ok(liked)
    }

    async fn bookmarked_among(&self, viewer_id: Uuid, item_ids: &[Uuid]) -> AppResult<Vec<Uuid>> {
        let pool = self.pool.as_ref();
        let bookmarked = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT feed_item_id
            FROM bookmarks
            WHERE user_id = $1 AND feed_item_id = ANY($2)
            "#,
        )
        .bind(viewer_id)
        .bind(item_ids)
        .fetch_all(pool)
        .await?;

        Ok(bookmarked)
    }

    async fn engagement_counts(
        &self,
        item_ids: &[Uuid],
    ) -> AppResult<HashMap<Uuid, EngagementCounts>> {
        let pool = self.pool.as_ref();
        // shares are tracked per post, so RSS items always count zero
        let rows = sqlx::query_as::<_, EngagementRow>(
            r#"
            SELECT
                fi.id AS feed_item_id,
                (SELECT COUNT(*) FROM likes l WHERE l.feed_item_id = fi.id) AS like_count,
                (SELECT COUNT(*) FROM comments c WHERE c.feed_item_id = fi.id) AS comment_count,
                (SELECT COUNT(*) FROM post_shares s WHERE s.post_id = fi.post_id) AS share_count
            FROM feed_items fi
            WHERE fi.id = ANY($1)
            "#,
        )
        .bind(item_ids)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.feed_item_id, row.counts))
            .collect())
    }
}

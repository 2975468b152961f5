use crate::domain::content::{Category, FeedItemRow};
use crate::domain::feed::{BookmarkedRow, CategoryPredicate, Cursor, FeedItemStore, PageQuery};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use std::sync::{Arc, LazyLock};
use uuid::Uuid;

/// Columns of the unified feed row, both payloads side by side.
const FEED_ITEM_COLUMNS: &str = r#"
    fi.id,
    fi.published_at,
    re.id AS rss_entry_id,
    re.title AS rss_title,
    re.summary AS rss_summary,
    re.content_text AS rss_content_text,
    re.description AS rss_description,
    re.author_name AS rss_author_name,
    re.link AS rss_link,
    re.image_url AS rss_image_url,
    rs.title AS source_title,
    rs.image_url AS source_image_url,
    COALESCE(
        (SELECT json_agg(json_build_object('id', t.id, 'name', t.name, 'color', t.color) ORDER BY t.name)
         FROM rss_entry_technologies ret
         JOIN technologies t ON t.id = ret.technology_id
         WHERE ret.rss_entry_id = re.id),
        '[]'::json
    ) AS technologies,
    p.id AS post_id,
    p.title AS post_title,
    p.body AS post_body,
    u.display_name AS author_display_name,
    u.name AS author_name,
    u.image AS author_image,
    COALESCE(
        (SELECT json_agg(json_build_object('id', h.id, 'name', h.name) ORDER BY h.name)
         FROM post_hashtags ph
         JOIN hashtags h ON h.id = ph.hashtag_id
         WHERE ph.post_id = p.id),
        '[]'::json
    ) AS hashtags
"#;

const FEED_ITEM_JOINS: &str = r#"
    LEFT JOIN rss_entries re ON re.id = fi.rss_entry_id
    LEFT JOIN rss_sources rs ON rs.id = re.source_id
    LEFT JOIN posts p ON p.id = fi.post_id
    LEFT JOIN users u ON u.id = p.author_id
"#;

static PAGE_QUERY: LazyLock<String> = LazyLock::new(|| {
    format!(
        r#"
        SELECT {columns}
        FROM feed_items fi
        {joins}
        WHERE fi.is_published
          AND ($1::timestamptz IS NULL OR fi.created_at >= $1)
          AND ($2::timestamptz IS NULL OR fi.created_at < $2)
          AND ($3::timestamptz IS NULL OR (fi.published_at, fi.id) < ($3::timestamptz, $4::uuid))
          AND {category}
        ORDER BY fi.published_at DESC, fi.id DESC
        LIMIT $6
        "#,
        columns = FEED_ITEM_COLUMNS,
        joins = FEED_ITEM_JOINS,
        category = CategoryPredicate::sql(5),
    )
});

static BY_ID_QUERY: LazyLock<String> = LazyLock::new(|| {
    format!(
        r#"
        SELECT {columns}
        FROM feed_items fi
        {joins}
        WHERE fi.id = $1 AND fi.is_published
        "#,
        columns = FEED_ITEM_COLUMNS,
        joins = FEED_ITEM_JOINS,
    )
});

static BOOKMARKED_QUERY: LazyLock<String> = LazyLock::new(|| {
    format!(
        r#"
        SELECT b.id AS bookmark_id, b.created_at AS bookmarked_at, {columns}
        FROM bookmarks b
        JOIN feed_items fi ON fi.id = b.feed_item_id
        {joins}
        WHERE b.user_id = $1
          AND fi.is_published
          AND ($2::timestamptz IS NULL OR (b.created_at, b.id) < ($2::timestamptz, $3::uuid))
        ORDER BY b.created_at DESC, b.id DESC
        LIMIT $4
        "#,
        columns = FEED_ITEM_COLUMNS,
        joins = FEED_ITEM_JOINS,
    )
});

pub struct FeedItemRepository {
    pool: Arc<DbPool>,
}

impl FeedItemRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedItemStore for FeedItemRepository {
    async fn find_page(&self, query: &PageQuery) -> AppResult<Vec<FeedItemRow>> {
        let pool = self.pool.as_ref();
        let rows = sqlx::query_as::<_, FeedItemRow>(PAGE_QUERY.as_str())
            .bind(query.window.map(|w| w.start))
            .bind(query.window.map(|w| w.end))
            .bind(query.after.map(|c| c.published_at))
            .bind(query.after.map(|c| c.id))
            .bind(query.category.bind_value())
            .bind(query.fetch)
            .fetch_all(pool)
            .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, item_id: Uuid) -> AppResult<Option<FeedItemRow>> {
        let pool = self.pool.as_ref();
        let row = sqlx::query_as::<_, FeedItemRow>(BY_ID_QUERY.as_str())
            .bind(item_id)
            .fetch_optional(pool)
            .await?;

        Ok(row)
    }

    async fn find_bookmarked(
        &self,
        user_id: Uuid,
        after: Option<Cursor>,
        fetch: i64,
    ) -> AppResult<Vec<BookmarkedRow>> {
        let pool = self.pool.as_ref();
        let rows = sqlx::query_as::<_, BookmarkedRow>(BOOKMARKED_QUERY.as_str())
            .bind(user_id)
            .bind(after.map(|c| c.published_at))
            .bind(after.map(|c| c.id))
            .bind(fetch)
            .fetch_all(pool)
            .await?;

        Ok(rows)
    }

    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        let pool = self.pool.as_ref();
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, color
            FROM technologies
            ORDER BY name
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(categories)
    }
}

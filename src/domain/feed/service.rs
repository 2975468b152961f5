use super::{
    Article, CategoryIndex, Cursor, FeedAssembler, FeedItemStore, FeedPageResponse, FeedRequest,
    FeedServiceError, PageQuery, TimeWindow, WindowPolicy,
};
use crate::domain::content::{Category, ContentItem, FeedItemRow, RawFeedItem};
use crate::domain::feed::time_window::fixed_offset;
use crate::domain::interaction::InteractionStateStore;
use crate::infrastructure::config::FeedSettings;
use async_trait::async_trait;
use chrono::{FixedOffset, Utc};
use std::sync::Arc;
use uuid::Uuid;

const BOOKMARKS_DEFAULT_LIMIT: i64 = 20;

/// Unified feed pager.
///
/// Stateless between requests: every call reads storage, then overlays the
/// viewer's interaction state. A page is returned whole or not at all.
pub struct FeedService {
    feed_store: Arc<dyn FeedItemStore>,
    interactions: Arc<InteractionStateStore>,
    settings: FeedSettings,
    offset: FixedOffset,
}

impl FeedService {
    pub fn new(
        feed_store: Arc<dyn FeedItemStore>,
        interactions: Arc<InteractionStateStore>,
        settings: FeedSettings,
    ) -> Self {
        let offset = fixed_offset(settings.utc_offset_minutes);
        Self {
            feed_store,
            interactions,
            settings,
            offset,
        }
    }
}

#[async_trait]
pub trait FeedServiceApi: Send + Sync {
    async fn get_feed_page(
        &self,
        viewer_id: Option<Uuid>,
        request: FeedRequest,
    ) -> Result<FeedPageResponse, FeedServiceError>;

    async fn get_article(
        &self,
        viewer_id: Option<Uuid>,
        item_id: Uuid,
    ) -> Result<Option<Article>, FeedServiceError>;

    async fn list_categories(&self) -> Result<Vec<Category>, FeedServiceError>;

    async fn get_bookmarked_page(
        &self,
        user_id: Uuid,
        cursor: Option<String>,
        limit: Option<i64>,
    ) -> Result<FeedPageResponse, FeedServiceError>;
}

#[async_trait]
impl FeedServiceApi for FeedService {
    async fn get_feed_page(
        &self,
        viewer_id: Option<Uuid>,
        request: FeedRequest,
    ) -> Result<FeedPageResponse, FeedServiceError> {
        let limit = self.page_size(request.limit, self.settings.default_limit)?;
        let after = decode_cursor(request.cursor.as_deref())?;

        let policy = WindowPolicy::resolve(
            request.window,
            after.is_some(),
            request.category_id.is_some(),
        );
        let window = match policy {
            WindowPolicy::Today => Some(TimeWindow::today(Utc::now(), self.offset)),
            WindowPolicy::Unbounded => None,
        };

        let query = PageQuery {
            window,
            after,
            category: CategoryIndex::resolve(request.category_id),
            fetch: limit + 1,
        };

        let rows = self
            .feed_store
            .find_page(&query)
            .await
            .map_err(|e| FeedServiceError::Unavailable(e.to_string()))?;

        let (rows, next_cursor, has_more) = split_page(rows, limit, FeedItemRow::cursor);
        let articles = self.enrich(viewer_id, normalize_rows(rows)).await?;

        tracing::debug!(
            viewer_id = ?viewer_id,
            category_id = ?request.category_id,
            window = ?policy,
            returned = articles.len(),
            has_more,
            "Feed page served"
        );

        Ok(FeedPageResponse {
            articles,
            next_cursor: next_cursor.map(|c| c.encode()),
            has_more,
        })
    }

    async fn get_article(
        &self,
        viewer_id: Option<Uuid>,
        item_id: Uuid,
    ) -> Result<Option<Article>, FeedServiceError> {
        let row = self
            .feed_store
            .find_by_id(item_id)
            .await
            .map_err(|e| FeedServiceError::Unavailable(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut articles = self.enrich(viewer_id, normalize_rows(vec![row])).await?;
        Ok(articles.pop())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, FeedServiceError> {
        self.feed_store
            .list_categories()
            .await
            .map_err(|e| FeedServiceError::Unavailable(e.to_string()))
    }

    async fn get_bookmarked_page(
        &self,
        user_id: Uuid,
        cursor: Option<String>,
        limit: Option<i64>,
    ) -> Result<FeedPageResponse, FeedServiceError> {
        let limit = self.page_size(limit, BOOKMARKS_DEFAULT_LIMIT)?;
        let after = decode_cursor(cursor.as_deref())?;

        let rows = self
            .feed_store
            .find_bookmarked(user_id, after, limit + 1)
            .await
            .map_err(|e| FeedServiceError::Unavailable(e.to_string()))?;

        let (rows, next_cursor, has_more) = split_page(rows, limit, |row| row.cursor());
        let items = normalize_rows(rows.into_iter().map(|row| row.item).collect());
        let articles = self.enrich(Some(user_id), items).await?;

        Ok(FeedPageResponse {
            articles,
            next_cursor: next_cursor.map(|c| c.encode()),
            has_more,
        })
    }
}

impl FeedService {
    /// Positive limits only, clamped to the configured maximum
    fn page_size(&self, limit: Option<i64>, default: i64) -> Result<i64, FeedServiceError> {
        match limit {
            None => Ok(default.min(self.settings.max_limit)),
            Some(limit) if limit < 1 => Err(FeedServiceError::InvalidRequest(
                "limit must be a positive integer".to_string(),
            )),
            Some(limit) => Ok(limit.min(self.settings.max_limit)),
        }
    }

    /// Overlay interaction state and engagement counts on a page of items
    async fn enrich(
        &self,
        viewer_id: Option<Uuid>,
        items: Vec<ContentItem>,
    ) -> Result<Vec<Article>, FeedServiceError> {
        let ids: Vec<Uuid> = items.iter().map(ContentItem::id).collect();

        let (states, counts) = tokio::try_join!(
            self.interactions.resolve_batch(viewer_id, &ids),
            self.interactions.engagement(&ids),
        )
        .map_err(|e| FeedServiceError::Unavailable(e.to_string()))?;

        Ok(FeedAssembler::assemble_page(items, &states, &counts))
    }
}

fn decode_cursor(token: Option<&str>) -> Result<Option<Cursor>, FeedServiceError> {
    token
        .map(|token| {
            Cursor::decode(token)
                .map_err(|e| FeedServiceError::InvalidRequest(format!("{}: {}", e, token)))
        })
        .transpose()
}

/// Trim an over-fetched row set to `limit`; the extra row only signals continuation
fn split_page<T>(
    mut rows: Vec<T>,
    limit: i64,
    cursor_of: impl Fn(&T) -> Cursor,
) -> (Vec<T>, Option<Cursor>, bool) {
    let limit = usize::try_from(limit).unwrap_or(0);
    let has_more = rows.len() > limit;
    rows.truncate(limit);

    let next_cursor = if has_more {
        rows.last().map(cursor_of)
    } else {
        None
    };

    (rows, next_cursor, has_more)
}

fn normalize_rows(rows: Vec<FeedItemRow>) -> Vec<ContentItem> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.id;
            let item = ContentItem::normalize(RawFeedItem::from(row));
            if item.is_none() {
                tracing::warn!(feed_item_id = %id, "Dropping malformed feed item");
            }
            item
        })
        .collect()
}

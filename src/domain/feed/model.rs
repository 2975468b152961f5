use super::{CategoryPredicate, Cursor, TimeWindow};
use crate::domain::content::{Category, FeedItemRow};
use crate::error::AppResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Storage-level page request, already validated.
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    pub window: Option<TimeWindow>,
    pub after: Option<Cursor>,
    pub category: CategoryPredicate,
    /// Rows to fetch, one more than the page size
    pub fetch: i64,
}

/// A feed row reached through one of the viewer's bookmarks.
#[derive(Debug, Clone, FromRow)]
pub struct BookmarkedRow {
    pub bookmark_id: Uuid,
    pub bookmarked_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub item: FeedItemRow,
}

impl FeedItemRow {
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.published_at, self.id)
    }
}

impl BookmarkedRow {
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.bookmarked_at, self.bookmark_id)
    }
}

/// Read access to published feed content.
#[async_trait]
pub trait FeedItemStore: Send + Sync {
    /// Published items matching `query`, newest first, at most `query.fetch` rows
    async fn find_page(&self, query: &PageQuery) -> AppResult<Vec<FeedItemRow>>;

    /// A single published item
    async fn find_by_id(&self, item_id: Uuid) -> AppResult<Option<FeedItemRow>>;

    /// The viewer's bookmarked items, most recently bookmarked first
    async fn find_bookmarked(
        &self,
        user_id: Uuid,
        after: Option<Cursor>,
        fetch: i64,
    ) -> AppResult<Vec<BookmarkedRow>>;

    /// Category catalog ordered by name
    async fn list_categories(&self) -> AppResult<Vec<Category>>;
}

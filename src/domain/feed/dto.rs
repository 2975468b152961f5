use super::WindowPolicy;
use crate::domain::content::{Category, ContentKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller-facing article, one per feed item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub id: Uuid,
    pub kind: ContentKind,
    pub title: String,
    pub body: String,
    pub author_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub like_count: i64,
    pub comment_count: i64,
    pub share_count: i64,
    pub is_liked: bool,
    pub is_bookmarked: bool,
    pub categories: Vec<Category>,
}

/// Response for GET /api/feed and GET /api/bookmarks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedPageResponse {
    pub articles: Vec<Article>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

/// Query string for GET /api/feed
#[derive(Debug, Default, Deserialize)]
pub struct FeedQueryParams {
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub window: Option<WindowPolicy>,
}

/// Query string for GET /api/bookmarks
#[derive(Debug, Default, Deserialize)]
pub struct BookmarkQueryParams {
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Validated input to the feed pager
#[derive(Debug, Clone, Default)]
pub struct FeedRequest {
    pub cursor: Option<String>,
    pub category_id: Option<Uuid>,
    pub limit: Option<i64>,
    /// `None` lets the pager pick the policy from the rest of the request
    pub window: Option<WindowPolicy>,
}

use serde::{Deserialize, Serialize};

/// A viewer's relation to one feed item. Missing rows read as `false`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InteractionState {
    pub is_liked: bool,
    pub is_bookmarked: bool,
}

/// Public engagement totals for one feed item
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct EngagementCounts {
    pub like_count: i64,
    pub comment_count: i64,
    pub share_count: i64,
}

/// Response for POST /api/articles/:id/like
#[derive(Debug, Serialize, Deserialize)]
pub struct LikeToggleResponse {
    pub is_liked: bool,
}

/// Response for POST /api/articles/:id/bookmark
#[derive(Debug, Serialize, Deserialize)]
pub struct BookmarkToggleResponse {
    pub is_bookmarked: bool,
}

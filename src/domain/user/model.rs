use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const USERNAME_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Technology a user follows, with its catalog grouping
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Technology {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct ProfileStats {
    pub followers_count: i64,
    pub following_count: i64,
    pub liked_count: i64,
    pub bookmarked_count: i64,
}

/// Trimmed username, or the reason it is rejected
pub fn normalize_username(raw: &str) -> Result<String, String> {
    let username = raw.trim();

    if username.is_empty() {
        return Err("Username cannot be empty".to_string());
    }
    if username.chars().count() > USERNAME_MAX_CHARS {
        return Err(format!(
            "Username must be at most {} characters",
            USERNAME_MAX_CHARS
        ));
    }

    Ok(username.to_string())
}

pub fn normalize_image_url(raw: &str) -> Result<String, String> {
    let url = raw.trim();

    if url.is_empty() {
        return Err("Image URL cannot be empty".to_string());
    }

    Ok(url.to_string())
}

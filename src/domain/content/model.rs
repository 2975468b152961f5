use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

const UNKNOWN_AUTHOR: &str = "Unknown";

/// A technology tag (RSS) or hashtag (Post), projected into one shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    /// Hashtags never carry a color
    #[serde(default, alias = "color", skip_serializing_if = "Option::is_none")]
    #[sqlx(rename = "color")]
    pub color_hint: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Rss,
    Post,
}

/// One row of the unified feed query, before normalization.
///
/// RSS columns are all null when the item is a post, and the other way round.
#[derive(Debug, Clone, FromRow)]
pub struct FeedItemRow {
    pub id: Uuid,
    pub published_at: DateTime<Utc>,

    pub rss_entry_id: Option<Uuid>,
    pub rss_title: Option<String>,
    pub rss_summary: Option<String>,
    pub rss_content_text: Option<String>,
    pub rss_description: Option<String>,
    pub rss_author_name: Option<String>,
    pub rss_link: Option<String>,
    pub rss_image_url: Option<String>,
    pub source_title: Option<String>,
    pub source_image_url: Option<String>,
    pub technologies: Json<Vec<Category>>,

    pub post_id: Option<Uuid>,
    pub post_title: Option<String>,
    pub post_body: Option<String>,
    pub author_display_name: Option<String>,
    pub author_name: Option<String>,
    pub author_image: Option<String>,
    pub hashtags: Json<Vec<Category>>,
}

#[derive(Debug, Clone, Default)]
pub struct RawRssEntry {
    pub title: String,
    pub summary: Option<String>,
    pub content_text: Option<String>,
    pub description: Option<String>,
    pub author_name: Option<String>,
    pub link: Option<String>,
    pub image_url: Option<String>,
    pub source_title: Option<String>,
    pub source_image_url: Option<String>,
    pub technologies: Vec<Category>,
}

#[derive(Debug, Clone, Default)]
pub struct RawPost {
    pub post_id: Uuid,
    pub title: String,
    pub body: Option<String>,
    pub author_display_name: Option<String>,
    pub author_name: Option<String>,
    pub author_image: Option<String>,
    pub hashtags: Vec<Category>,
}

/// A feed row with its kind-specific payloads split out.
#[derive(Debug, Clone)]
pub struct RawFeedItem {
    pub id: Uuid,
    pub published_at: DateTime<Utc>,
    pub rss: Option<RawRssEntry>,
    pub post: Option<RawPost>,
}

impl From<FeedItemRow> for RawFeedItem {
    fn from(row: FeedItemRow) -> Self {
        let rss = row.rss_entry_id.map(|_| RawRssEntry {
            title: row.rss_title.unwrap_or_default(),
            summary: row.rss_summary,
            content_text: row.rss_content_text,
            description: row.rss_description,
            author_name: row.rss_author_name,
            link: row.rss_link,
            image_url: row.rss_image_url,
            source_title: row.source_title,
            source_image_url: row.source_image_url,
            technologies: row.technologies.0,
        });

        let post = row.post_id.map(|post_id| RawPost {
            post_id,
            title: row.post_title.unwrap_or_default(),
            body: row.post_body,
            author_display_name: row.author_display_name,
            author_name: row.author_name,
            author_image: row.author_image,
            hashtags: row.hashtags.0,
        });

        Self {
            id: row.id,
            published_at: row.published_at,
            rss,
            post,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RssArticle {
    pub id: Uuid,
    pub published_at: DateTime<Utc>,
    pub title: String,
    pub body: String,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub original_url: Option<String>,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserPost {
    pub id: Uuid,
    pub post_id: Uuid,
    pub published_at: DateTime<Utc>,
    pub title: String,
    pub body: String,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub categories: Vec<Category>,
}

/// Normalized feed entry: either an ingested RSS article or a native user post.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentItem {
    Rss(RssArticle),
    Post(UserPost),
}

impl ContentItem {
    /// Build a feed item from a raw row.
    ///
    /// Returns `None` when the row carries both payloads or neither of them.
    pub fn normalize(raw: RawFeedItem) -> Option<Self> {
        match (raw.rss, raw.post) {
            (Some(entry), None) => Some(Self::Rss(RssArticle {
                id: raw.id,
                published_at: raw.published_at,
                title: entry.title,
                body: first_present([entry.summary, entry.content_text, entry.description])
                    .unwrap_or_default(),
                author_name: first_present([entry.author_name, entry.source_title])
                    .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
                author_avatar: first_present([entry.image_url, entry.source_image_url]),
                original_url: entry.link.filter(|link| !link.is_empty()),
                categories: entry.technologies,
            })),
            (None, Some(post)) => Some(Self::Post(UserPost {
                id: raw.id,
                post_id: post.post_id,
                published_at: raw.published_at,
                title: post.title,
                body: post.body.unwrap_or_default(),
                author_name: first_present([post.author_display_name, post.author_name])
                    .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
                author_avatar: post.author_image.filter(|image| !image.is_empty()),
                categories: post
                    .hashtags
                    .into_iter()
                    .map(|tag| Category {
                        color_hint: None,
                        ..tag
                    })
                    .collect(),
            })),
            _ => None,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Self::Rss(article) => article.id,
            Self::Post(post) => post.id,
        }
    }
}

/// First value that is present and not empty, in order
fn first_present<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
}

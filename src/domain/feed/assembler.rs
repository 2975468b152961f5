use super::Article;
use crate::domain::content::{ContentItem, ContentKind};
use crate::domain::interaction::{EngagementCounts, InteractionState};
use std::collections::HashMap;
use uuid::Uuid;

pub struct FeedAssembler;

impl FeedAssembler {
    pub fn assemble(item: ContentItem, state: InteractionState, counts: EngagementCounts) -> Article {
        match item {
            ContentItem::Rss(article) => Article {
                id: article.id,
                kind: ContentKind::Rss,
                title: article.title,
                body: article.body,
                author_name: article.author_name,
                author_avatar: article.author_avatar,
                original_url: article.original_url,
                published_at: article.published_at,
                like_count: counts.like_count,
                comment_count: counts.comment_count,
                share_count: counts.share_count,
                is_liked: state.is_liked,
                is_bookmarked: state.is_bookmarked,
                categories: article.categories,
            },
            // posts are native content and have no original URL
            ContentItem::Post(post) => Article {
                id: post.id,
                kind: ContentKind::Post,
                title: post.title,
                body: post.body,
                author_name: post.author_name,
                author_avatar: post.author_avatar,
                original_url: None,
                published_at: post.published_at,
                like_count: counts.like_count,
                comment_count: counts.comment_count,
                share_count: counts.share_count,
                is_liked: state.is_liked,
                is_bookmarked: state.is_bookmarked,
                categories: post.categories,
            },
        }
    }

    /// Zip a page of items with their per-item state, keeping item order
    pub fn assemble_page(
        items: Vec<ContentItem>,
        states: &HashMap<Uuid, InteractionState>,
        counts: &HashMap<Uuid, EngagementCounts>,
    ) -> Vec<Article> {
        items
            .into_iter()
            .map(|item| {
                let id = item.id();
                Self::assemble(
                    item,
                    states.get(&id).copied().unwrap_or_default(),
                    counts.get(&id).copied().unwrap_or_default(),
                )
            })
            .collect()
    }
}

use super::error::InteractionServiceError;
use crate::infrastructure::repositories::{FeedItemKind, InteractionRepository};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct InteractionService {
    interaction_repo: Arc<InteractionRepository>,
}

impl InteractionService {
    pub fn new(interaction_repo: Arc<InteractionRepository>) -> Self {
        Self { interaction_repo }
    }
}

#[async_trait]
pub trait InteractionServiceApi: Send + Sync {
    /// Flip the viewer's like on an article, returning the new state
    async fn toggle_like(&self, user_id: Uuid, item_id: Uuid) -> Result<bool, InteractionServiceError>;

    /// Flip the viewer's bookmark on an article, returning the new state
    async fn toggle_bookmark(
        &self,
        user_id: Uuid,
        item_id: Uuid,
    ) -> Result<bool, InteractionServiceError>;

    async fn remove_bookmark(&self, user_id: Uuid, item_id: Uuid) -> Result<(), InteractionServiceError>;

    /// Record a share. Only user posts can be shared.
    async fn track_share(&self, user_id: Uuid, item_id: Uuid) -> Result<(), InteractionServiceError>;
}

#[async_trait]
impl InteractionServiceApi for InteractionService {
    async fn toggle_like(&self, user_id: Uuid, item_id: Uuid) -> Result<bool, InteractionServiceError> {
        self.find_kind(item_id).await?;

        let is_liked = self
            .interaction_repo
            .toggle_like(user_id, item_id)
            .await
            .map_err(|e| InteractionServiceError::Dependency(e.to_string()))?;

        tracing::debug!(%user_id, %item_id, is_liked, "Like toggled");
        Ok(is_liked)
    }

    async fn toggle_bookmark(
        &self,
        user_id: Uuid,
        item_id: Uuid,
    ) -> Result<bool, InteractionServiceError> {
        self.find_kind(item_id).await?;

        let is_bookmarked = self
            .interaction_repo
            .toggle_bookmark(user_id, item_id)
            .await
            .map_err(|e| InteractionServiceError::Dependency(e.to_string()))?;

        tracing::debug!(%user_id, %item_id, is_bookmarked, "Bookmark toggled");
        Ok(is_bookmarked)
    }

    async fn remove_bookmark(&self, user_id: Uuid, item_id: Uuid) -> Result<(), InteractionServiceError> {
        let removed = self
            .interaction_repo
            .remove_bookmark(user_id, item_id)
            .await
            .map_err(|e| InteractionServiceError::Dependency(e.to_string()))?;

        if !removed {
            return Err(InteractionServiceError::BookmarkNotFound);
        }

        Ok(())
    }

    async fn track_share(&self, user_id: Uuid, item_id: Uuid) -> Result<(), InteractionServiceError> {
        let post_id = match self.find_kind(item_id).await? {
            FeedItemKind::Post(post_id) => post_id,
            FeedItemKind::Rss => {
                return Err(InteractionServiceError::Invalid(
                    "This article cannot be shared".to_string(),
                ))
            }
        };

        self.interaction_repo
            .record_share(user_id, post_id)
            .await
            .map_err(|e| InteractionServiceError::Dependency(e.to_string()))?;

        Ok(())
    }
}

impl InteractionService {
    async fn find_kind(&self, item_id: Uuid) -> Result<FeedItemKind, InteractionServiceError> {
        self.interaction_repo
            .find_kind(item_id)
            .await
            .map_err(|e| InteractionServiceError::Dependency(e.to_string()))?
            .ok_or(InteractionServiceError::NotFound)
    }
}

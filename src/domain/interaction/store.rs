use super::{EngagementCounts, InteractionState};
use crate::error::AppResult;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

/// Bulk reads over the likes, bookmarks, comments and shares tables.
#[async_trait]
pub trait InteractionLookup: Send + Sync {
    /// Subset of `item_ids` the viewer has liked
    async fn liked_among(&self, viewer_id: Uuid, item_ids: &[Uuid]) -> AppResult<Vec<Uuid>>;

    /// Subset of `item_ids` the viewer has bookmarked
    async fn bookmarked_among(&self, viewer_id: Uuid, item_ids: &[Uuid]) -> AppResult<Vec<Uuid>>;

    /// Totals for every item in `item_ids` that exists
    async fn engagement_counts(
        &self,
        item_ids: &[Uuid],
    ) -> AppResult<HashMap<Uuid, EngagementCounts>>;
}

/// Resolves interaction state for a whole page at once.
pub struct InteractionStateStore {
    lookup: Arc<dyn InteractionLookup>,
}

impl InteractionStateStore {
    pub fn new(lookup: Arc<dyn InteractionLookup>) -> Self {
        Self { lookup }
    }

    /// Like/bookmark flags for every id in `item_ids`.
    ///
    /// Anonymous viewers get all-false without touching storage. Otherwise
    /// exactly two queries run, concurrently. The map always has a key for
    /// every requested id.
    pub async fn resolve_batch(
        &self,
        viewer_id: Option<Uuid>,
        item_ids: &[Uuid],
    ) -> AppResult<HashMap<Uuid, InteractionState>> {
        let viewer_id = match viewer_id {
            Some(id) if !item_ids.is_empty() => id,
            _ => {
                return Ok(item_ids
                    .iter()
                    .map(|id| (*id, InteractionState::default()))
                    .collect())
            }
        };

        let (liked, bookmarked) = tokio::try_join!(
            self.lookup.liked_among(viewer_id, item_ids),
            self.lookup.bookmarked_among(viewer_id, item_ids),
        )?;

        let liked: HashSet<Uuid> = liked.into_iter().collect();
        let bookmarked: HashSet<Uuid> = bookmarked.into_iter().collect();

        Ok(item_ids
            .iter()
            .map(|id| {
                (
                    *id,
                    InteractionState {
                        is_liked: liked.contains(id),
                        is_bookmarked: bookmarked.contains(id),
                    },
                )
            })
            .collect())
    }

    /// Engagement totals for every id, zero-filled for ids without any activity
    pub async fn engagement(&self, item_ids: &[Uuid]) -> AppResult<HashMap<Uuid, EngagementCounts>> {
        if item_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut counts = self.lookup.engagement_counts(item_ids).await?;
        for id in item_ids {
            counts.entry(*id).or_default();
        }
        Ok(counts)
    }
}

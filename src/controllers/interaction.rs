use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::interaction::{BookmarkToggleResponse, LikeToggleResponse};
use crate::{
    domain::interaction::{InteractionService, InteractionServiceApi},
    error::AppResult,
    infrastructure::auth::AuthUser,
};

pub struct InteractionController {
    interaction_service: Arc<InteractionService>,
}

impl InteractionController {
    pub fn new(interaction_service: Arc<InteractionService>) -> Self {
        Self {
            interaction_service,
        }
    }

    /// POST /api/articles/{id}/like - Toggle like
    pub async fn toggle_like(
        State(controller): State<Arc<InteractionController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(item_id): Path<Uuid>,
    ) -> AppResult<Json<LikeToggleResponse>> {
        let is_liked = controller
            .interaction_service
            .toggle_like(auth_user.user_id, item_id)
            .await?;
        Ok(Json(LikeToggleResponse { is_liked }))
    }

    /// POST /api/articles/{id}/bookmark - Toggle bookmark
    pub async fn toggle_bookmark(
        State(controller): State<Arc<InteractionController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(item_id): Path<Uuid>,
    ) -> AppResult<Json<BookmarkToggleResponse>> {
        let is_bookmarked = controller
            .interaction_service
            .toggle_bookmark(auth_user.user_id, item_id)
            .await?;
        Ok(Json(BookmarkToggleResponse { is_bookmarked }))
    }

    /// POST /api/articles/{id}/share - Record a share
    pub async fn share(
        State(controller): State<Arc<InteractionController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(item_id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        controller
            .interaction_service
            .track_share(auth_user.user_id, item_id)
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// DELETE /api/bookmarks/{id} - Remove bookmark
    pub async fn remove_bookmark(
        State(controller): State<Arc<InteractionController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(item_id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        controller
            .interaction_service
            .remove_bookmark(auth_user.user_id, item_id)
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }
}

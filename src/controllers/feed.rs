use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::content::Category;
use crate::domain::feed::{
    Article, BookmarkQueryParams, FeedPageResponse, FeedQueryParams, FeedRequest,
};
use crate::{
    domain::feed::{FeedService, FeedServiceApi},
    error::{AppError, AppResult},
    infrastructure::auth::{AuthUser, Viewer},
};

pub struct FeedController {
    feed_service: Arc<FeedService>,
}

impl FeedController {
    pub fn new(feed_service: Arc<FeedService>) -> Self {
        Self { feed_service }
    }

    /// GET /api/feed - One page of the unified feed
    pub async fn get_feed(
        State(controller): State<Arc<FeedController>>,
        Extension(Viewer(viewer_id)): Extension<Viewer>,
        Query(params): Query<FeedQueryParams>,
    ) -> AppResult<Json<FeedPageResponse>> {
        let request = FeedRequest {
            cursor: params.cursor.filter(|c| !c.is_empty()),
            category_id: parse_category_id(params.category_id.as_deref())?,
            limit: params.limit,
            window: params.window,
        };

        let page = controller
            .feed_service
            .get_feed_page(viewer_id, request)
            .await?;
        Ok(Json(page))
    }

    /// GET /api/articles/{id} - Single published article
    pub async fn get_article(
        State(controller): State<Arc<FeedController>>,
        Extension(Viewer(viewer_id)): Extension<Viewer>,
        Path(item_id): Path<Uuid>,
    ) -> AppResult<Json<Article>> {
        let article = controller
            .feed_service
            .get_article(viewer_id, item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Article not found".to_string()))?;
        Ok(Json(article))
    }

    /// GET /api/categories - Category catalog
    pub async fn list_categories(
        State(controller): State<Arc<FeedController>>,
    ) -> AppResult<Json<Vec<Category>>> {
        let categories = controller.feed_service.list_categories().await?;
        Ok(Json(categories))
    }

    /// GET /api/bookmarks - Viewer's bookmarked articles, newest bookmark first
    pub async fn list_bookmarks(
        State(controller): State<Arc<FeedController>>,
        Extension(auth_user): Extension<AuthUser>,
        Query(params): Query<BookmarkQueryParams>,
    ) -> AppResult<Json<FeedPageResponse>> {
        let page = controller
            .feed_service
            .get_bookmarked_page(
                auth_user.user_id,
                params.cursor.filter(|c| !c.is_empty()),
                params.limit,
            )
            .await?;
        Ok(Json(page))
    }
}

fn parse_category_id(raw: Option<&str>) -> AppResult<Option<Uuid>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(raw) => Uuid::parse_str(raw)
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("Invalid category_id: {}", raw))),
    }
}

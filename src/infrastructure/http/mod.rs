use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::domain::auth::JwtManager;
use crate::domain::feed::FeedService;
use crate::domain::interaction::{InteractionService, InteractionStateStore};
use crate::domain::user::UserService;
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;
use crate::infrastructure::repositories::{
    FeedItemRepository, InteractionRepository, UserRepository,
};
use crate::{
    controllers::{
        feed::FeedController, health, interaction::InteractionController, user::UserController,
    },
    infrastructure::auth::{auth_middleware, request_id_middleware, viewer_middleware, AuthState},
};

/// Wire repositories, services and controllers into the application router
pub fn create_app(pool: Arc<DbPool>, config: Arc<Config>) -> Router {
    // 1. Repositories (inject db pool)
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let feed_item_repo = Arc::new(FeedItemRepository::new(pool.clone()));
    let interaction_repo = Arc::new(InteractionRepository::new(pool.clone()));

    // 2. Services (inject repositories)
    let interaction_state = Arc::new(InteractionStateStore::new(interaction_repo.clone()));
    let feed_service = Arc::new(FeedService::new(
        feed_item_repo,
        interaction_state,
        config.feed.clone(),
    ));
    let interaction_service = Arc::new(InteractionService::new(interaction_repo));
    let user_service = Arc::new(UserService::new(user_repo.clone()));

    // 3. Controllers (inject services)
    let feed_controller = Arc::new(FeedController::new(feed_service));
    let interaction_controller = Arc::new(InteractionController::new(interaction_service));
    let user_controller = Arc::new(UserController::new(user_service));

    let auth_state: AuthState = (user_repo, Arc::new(JwtManager::new(&config.jwt_secret)));

    // Feed routes (optional authentication)
    let feed_routes = Router::new()
        .route("/api/feed", get(FeedController::get_feed))
        .route("/api/articles/:id", get(FeedController::get_article))
        .with_state(feed_controller.clone())
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            viewer_middleware,
        ));

    // Category catalog (public)
    let category_routes = Router::new()
        .route("/api/categories", get(FeedController::list_categories))
        .with_state(feed_controller.clone());

    // Bookmarks page (require authentication)
    let bookmark_routes = Router::new()
        .route("/api/bookmarks", get(FeedController::list_bookmarks))
        .with_state(feed_controller)
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ));

    // Interaction routes (require authentication)
    let interaction_routes = Router::new()
        .route(
            "/api/articles/:id/like",
            post(InteractionController::toggle_like),
        )
        .route(
            "/api/articles/:id/bookmark",
            post(InteractionController::toggle_bookmark),
        )
        .route("/api/articles/:id/share", post(InteractionController::share))
        .route(
            "/api/bookmarks/:id",
            delete(InteractionController::remove_bookmark),
        )
        .with_state(interaction_controller)
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ));

    // User routes (require authentication)
    let user_routes = Router::new()
        .route(
            "/api/me",
            get(UserController::get_me).patch(UserController::update_me),
        )
        .route(
            "/api/me/technologies",
            put(UserController::update_technologies),
        )
        .with_state(user_controller)
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware));

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool)
        .merge(feed_routes)
        .merge(category_routes)
        .merge(bookmark_routes)
        .merge(interaction_routes)
        .merge(user_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    pool: Arc<DbPool>,
    config: Arc<Config>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_app(pool, config.clone());

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

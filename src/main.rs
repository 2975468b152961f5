use std::sync::Arc;
use swipefeed_backend::infrastructure::config::{Config, LogFormat};
use swipefeed_backend::infrastructure::db::{check_connection, create_pool, run_migrations};
use swipefeed_backend::infrastructure::http::start_http_server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "swipefeed_backend=debug,tower_http=debug";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        development = config.is_development(),
        "Starting SwipeFeed Backend on {}:{}",
        config.host,
        config.port
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    // Verify database connection
    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    tracing::info!(
        default_limit = config.feed.default_limit,
        max_limit = config.feed.max_limit,
        utc_offset_minutes = config.feed.utc_offset_minutes,
        "Feed settings loaded"
    );

    start_http_server(Arc::new(pool), Arc::new(config)).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

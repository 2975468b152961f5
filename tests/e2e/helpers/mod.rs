use once_cell::sync::Lazy;
use sqlx::PgPool;
use std::sync::Arc;
use swipefeed_backend::infrastructure::config::{Config, Environment, FeedSettings, LogFormat};
use swipefeed_backend::infrastructure::http::create_app;
use test_context::AsyncTestContext;
use testcontainers::{clients::Cli, Container};
use testcontainers_modules::postgres::Postgres;
use tokio::net::TcpListener;
use uuid::Uuid;

pub mod api_client;
pub mod assertions;

use api_client::TestClient;
use db_pool::{TestDatabase, TestDatabases};
use fixtures::TestFixtures;

// Docker client for test containers
static DOCKER: Lazy<Cli> = Lazy::new(Cli::default);

// Shared PostgreSQL container for all tests
static SHARED_CONTAINER: Lazy<SharedContainer> = Lazy::new(SharedContainer::new);

// One database per test, all inside the shared container
static DATABASES: Lazy<TestDatabases> = Lazy::new(|| TestDatabases::new(SHARED_CONTAINER.port));

/// Shared container that lives for the duration of all tests
struct SharedContainer {
    _container: Container<'static, Postgres>,
    port: u16,
}

impl SharedContainer {
    fn new() -> Self {
        let container = DOCKER.run(Postgres::default());
        let port = container.get_host_port_ipv4(5432);

        println!("Started shared PostgreSQL container on port {}", port);

        Self {
            _container: container,
            port,
        }
    }
}

pub struct TestContext {
    pub client: TestClient,
    #[allow(dead_code)]
    pub pool: PgPool,
    pub config: Config,
    pub fixtures: TestFixtures,
    _db: TestDatabase,
}

impl TestContext {
    /// Token for a fixture user, signed with the test secret
    pub fn token_for(&self, user_id: &Uuid) -> String {
        generate_test_jwt(user_id, &self.config.jwt_secret)
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let test_db = DATABASES
                .create()
                .await
                .expect("Failed to create test database");

            let config = Config {
                database_url: test_db.database_url.clone(),
                host: "127.0.0.1".to_string(),
                port: 0, // Will be assigned by the OS
                jwt_secret: "test-jwt-secret-key-for-testing-only".to_string(),
                environment: Environment::Development,
                log_format: LogFormat::Pretty,
                feed: FeedSettings::default(),
            };

            let app = create_app(
                Arc::new(test_db.pool.clone()),
                Arc::new(config.clone()),
            );

            // Start server
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            // Wait for server to be ready
            tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

            let client = TestClient::new(&base_url);
            let fixtures = TestFixtures::new(test_db.pool.clone());

            Self {
                client,
                pool: test_db.pool.clone(),
                config,
                fixtures,
                _db: test_db,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // databases are discarded together with the container
        }
    }
}

// Helper to generate valid JWT tokens for testing
pub fn generate_test_jwt(user_id: &Uuid, secret: &str) -> String {
    generate_test_jwt_with_expiry(user_id, secret, chrono::Duration::hours(1))
}

pub fn generate_test_jwt_with_expiry(
    user_id: &Uuid,
    secret: &str,
    expires_in: chrono::Duration,
) -> String {
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct Claims {
        sub: String,
        email: String,
        exp: i64,
        iat: i64,
    }

    let now = chrono::Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        email: "test@example.com".to_string(),
        exp: (now + expires_in).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

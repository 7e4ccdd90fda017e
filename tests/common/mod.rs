use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use story_intake::config::{Config, StoreBackend};
use story_intake::state::SharedState;
use story_intake::store::{MemoryStore, StoreError, SubmissionStore};

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub state: SharedState,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON body to `/api/submit`, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/submit"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST a raw body to `/api/submit`, return (body, status).
    pub async fn submit_raw(&self, body: &'static str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/submit"))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("submit raw failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Read back a stored record by key.
    pub async fn stored(&self, key: &str) -> Option<Value> {
        self.state.store.get(key).await.expect("store read failed")
    }
}

/// Store whose writes always fail.
pub struct FailingStore;

#[async_trait]
impl SubmissionStore for FailingStore {
    fn backend(&self) -> &'static str {
        "failing"
    }

    async fn put(&self, _key: &str, _value: &Value, _ttl: Duration) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    async fn get(&self, _key: &str) -> Result<Option<Value>, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        allowed_origin: "https://story.markets".to_string(),
        retention_secs: 60 * 60 * 24 * 90,
        service_name: "story.markets intake".to_string(),
        store: StoreBackend::Memory,
        database_url: None,
        max_body_size: 65536,
        sweep_interval_secs: 300,
        log_level: "warn".to_string(),
    }
}

/// Spawn a test app backed by a fresh in-memory store.
pub async fn spawn_app(config: Config) -> TestApp {
    spawn_app_with(Arc::new(MemoryStore::new()), config).await
}

pub async fn spawn_app_with(store: Arc<dyn SubmissionStore>, config: Config) -> TestApp {
    let (app, state) = story_intake::build_app(store, config);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder().build().unwrap();

    TestApp {
        addr,
        client,
        state,
    }
}

/// A dedicated Postgres database for one test.
#[allow(dead_code)]
pub struct TestDb {
    pub pool: PgPool,
    pub db_name: String,
    admin_url: String,
}

fn with_db_name(url: &str, db_name: &str) -> String {
    url.rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| url.to_string())
}

/// Create a fresh migrated database, or `None` when `DATABASE_URL` is unset.
#[allow(dead_code)]
pub async fn spawn_test_db() -> Option<TestDb> {
    let _ = dotenvy::dotenv();

    let Ok(base_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping Postgres test");
        return None;
    };

    let db_name = format!(
        "story_intake_test_{}_{}",
        chrono::Utc::now().timestamp_millis(),
        rand::random::<u32>()
    );
    let admin_url = with_db_name(&base_url, "postgres");

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&with_db_name(&base_url, &db_name))
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    Some(TestDb {
        pool,
        db_name,
        admin_url,
    })
}

/// Drop the test database after a test completes.
#[allow(dead_code)]
pub async fn cleanup_db(db: TestDb) {
    db.pool.close().await;

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&db.admin_url)
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!(
        "DROP DATABASE IF EXISTS \"{}\" WITH (FORCE)",
        db.db_name
    ))
    .execute(&admin_pool)
    .await;

    admin_pool.close().await;
}

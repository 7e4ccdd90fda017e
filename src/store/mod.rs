pub mod memory;
pub mod null;
pub mod postgres;

use std::time::Duration;

use async_trait::async_trait;

pub use memory::MemoryStore;
pub use null::NullStore;
pub use postgres::PgStore;

#[derive(Debug)]
pub enum StoreError {
    Database(sqlx::Error),
    Serialize(serde_json::Error),
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Database(err) => write!(f, "Database error: {err}"),
            StoreError::Serialize(err) => write!(f, "Serialization error: {err}"),
            StoreError::Unavailable(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialize(err)
    }
}

/// Key-value capability submissions are written to.
///
/// Every entry carries a time-to-live. Expired entries are never returned by
/// `get`, whether or not `purge_expired` has removed them yet.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    fn backend(&self) -> &'static str;

    /// Write `value` under `key`, replacing any existing entry.
    async fn put(&self, key: &str, value: &serde_json::Value, ttl: Duration) -> Result<(), StoreError>;

    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError>;

    /// Delete expired entries. Returns how many were removed.
    async fn purge_expired(&self) -> Result<u64, StoreError> {
        Ok(0)
    }
}

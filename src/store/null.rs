use std::time::Duration;

use async_trait::async_trait;

use super::{StoreError, SubmissionStore};

/// Store used when no backend is configured. Writes succeed and are dropped.
pub struct NullStore;

#[async_trait]
impl SubmissionStore for NullStore {
    fn backend(&self) -> &'static str {
        "none"
    }

    async fn put(&self, key: &str, _value: &serde_json::Value, _ttl: Duration) -> Result<(), StoreError> {
        tracing::debug!("No store configured, skipping write of {key}");
        Ok(())
    }

    async fn get(&self, _key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        Ok(None)
    }
}

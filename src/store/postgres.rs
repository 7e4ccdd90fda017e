use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use super::{StoreError, SubmissionStore};

/// Key-value entries in the `kv_entries` table.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn put(&self, key: &str, value: &serde_json::Value, ttl: Duration) -> Result<(), StoreError> {
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| StoreError::Unavailable(format!("Invalid TTL: {e}")))?;
        let expires_at = chrono::Utc::now()
            .checked_add_signed(ttl)
            .ok_or_else(|| StoreError::Unavailable(format!("TTL out of range: {}s", ttl.num_seconds())))?;

        sqlx::query(
            "INSERT INTO kv_entries (key, value, expires_at) VALUES ($1, $2, $3)
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, expires_at = EXCLUDED.expires_at",
        )
        .bind(key)
        .bind(value)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        let value = sqlx::query_scalar::<_, serde_json::Value>(
            "SELECT value FROM kv_entries WHERE key = $1 AND expires_at > now()",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(value)
    }

    async fn purge_expired(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM kv_entries WHERE expires_at <= now()")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use super::{StoreError, SubmissionStore};

/// Process-local store. Entries are lost on restart.
pub struct MemoryStore {
    /// key -> (value, expires_at)
    entries: DashMap<String, (serde_json::Value, Instant)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of entries held, expired ones included until purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.key().clone()).collect()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn put(&self, key: &str, value: &serde_json::Value, ttl: Duration) -> Result<(), StoreError> {
        let expires_at = Instant::now()
            .checked_add(ttl)
            .ok_or_else(|| StoreError::Unavailable(format!("TTL out of range: {}s", ttl.as_secs())))?;
        self.entries.insert(key.to_string(), (value.clone(), expires_at));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        let now = Instant::now();
        let found = self
            .entries
            .get(key)
            .map(|entry| (entry.0.clone(), entry.1));

        match found {
            Some((value, expires_at)) if expires_at > now => Ok(Some(value)),
            Some(_) => {
                self.entries.remove_if(key, |_, (_, expires_at)| *expires_at <= now);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn purge_expired(&self) -> Result<u64, StoreError> {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, (_, expires_at)| *expires_at > now);
        Ok(before.saturating_sub(self.entries.len()) as u64)
    }
}

use std::collections::HashMap;
use std::future::Future;
use std::time::{Duration, Instant};

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug, Clone)]
struct CacheEntry {
    tag: String,
    value: Value,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |expires_at| now < expires_at)
    }
}

/// Read cache for backend responses, keyed by request path.
///
/// Every entry carries the tag of the resource it belongs to; mutations of
/// that resource call [`TagCache::revalidate`] so the next read goes back to
/// the backend. Entries with a TTL also expire on their own.
#[derive(Debug, Default)]
pub struct TagCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl TagCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, key: &str) -> Option<Value> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| entry.is_live(Instant::now()))
            .map(|entry| entry.value.clone())
    }

    pub async fn insert(&self, key: &str, tag: &str, ttl: Option<Duration>, value: Value) {
        let entry = CacheEntry {
            tag: tag.to_string(),
            value,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        };
        self.entries.write().await.insert(key.to_string(), entry);
    }

    /// Returns the live entry for `key` or runs `fetch` and stores its result.
    /// Errors are handed back to the caller and never stored.
    pub async fn get_or_fetch<F, Fut, E>(
        &self,
        key: &str,
        tag: &str,
        ttl: Option<Duration>,
        fetch: F,
    ) -> Result<Value, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, E>>,
    {
        if let Some(value) = self.get(key).await {
            debug!("Cache hit for {} (tag {})", key, tag);
            return Ok(value);
        }

        debug!("Cache miss for {} (tag {})", key, tag);
        let value = fetch().await?;
        self.insert(key, tag, ttl, value.clone()).await;
        Ok(value)
    }

    /// Drops every entry stored under `tag`, returning how many were removed.
    pub async fn revalidate(&self, tag: &str) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.tag != tag);
        let removed = before - entries.len();

        info!("Revalidated tag '{}' ({} entries dropped)", tag, removed);
        removed
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

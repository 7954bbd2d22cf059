//! Bounded in-process cache backed by `moka`.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

/// In-process cache with a fixed entry capacity.
///
/// Entries have no TTL; once the capacity is reached `moka` evicts by its
/// TinyLFU policy. Each process keeps its own copy, which is fine because a
/// mapping never changes once written.
#[derive(Clone)]
pub struct MemoryCache {
    inner: Cache<String, String>,
}

impl MemoryCache {
    pub fn new(max_capacity: u64) -> Self {
        debug!("Using MemoryCache (capacity: {})", max_capacity);
        Self {
            inner: Cache::builder().max_capacity(max_capacity).build(),
        }
    }

    /// Number of entries currently held, after pending maintenance.
    pub async fn len(&self) -> u64 {
        self.inner.run_pending_tasks().await;
        self.inner.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        Ok(self.inner.get(key).await)
    }

    async fn set(&self, key: &str, value: &str) -> CacheResult<()> {
        self.inner.insert(key.to_string(), value.to_string()).await;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

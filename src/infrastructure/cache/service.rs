//! Cache service trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during cache operations.
///
/// These never reach a client: the resolver logs them and carries on with the
/// durable store.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),
    #[error("Cache operation error: {0}")]
    Operation(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Best-effort key-value cache in front of the mapping store.
///
/// One keyspace holds both directions: a long URL key maps to its short code,
/// a short code key maps to its long URL. A value is only ever written after the
/// store confirmed it, so a hit is always a mapping that was true at write time.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed shared cache
/// - [`crate::infrastructure::cache::MemoryCache`] - Bounded in-process cache
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Looks up the counterpart stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` on cache hit
    /// - `Ok(None)` on cache miss
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] only when the backend cannot be reached or the
    /// command fails. A miss is never an error.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` under `key` without expiry.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the write did not happen. Callers treat this as
    /// a lost speed-up, not as a failure.
    async fn set(&self, key: &str, value: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Short backend name used in logs and health output.
    fn backend(&self) -> &'static str;
}

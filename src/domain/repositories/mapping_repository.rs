//! Repository trait for the durable mapping store.

use crate::domain::entities::{Mapping, NewMapping};
use crate::error::StoreError;
use async_trait::async_trait;

/// Durable store for URL mappings and the single source of truth.
///
/// Both `long_url` and `short_code` are unique in the store; implementations
/// report violations as [`StoreError::DuplicateLongUrl`] and
/// [`StoreError::DuplicateShortCode`] respectively.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryMappingRepository`] - In-process, for tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Finds the mapping for a long URL.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] when the store is unreachable or the query fails.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Mapping>, StoreError>;

    /// Finds the mapping for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] when the store is unreachable or the query fails.
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<Mapping>, StoreError>;

    /// Inserts a new mapping.
    ///
    /// # Errors
    ///
    /// - [`StoreError::DuplicateShortCode`] if the code is already taken
    /// - [`StoreError::DuplicateLongUrl`] if the long URL was inserted concurrently
    /// - [`StoreError::Database`] on any other failure
    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, StoreError>;

    /// Checks if the store is reachable.
    async fn health_check(&self) -> bool;
}

//! In-memory implementation of the mapping repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::StoreError;

/// Mapping store kept in process memory.
///
/// Enforces the same uniqueness rules as the PostgreSQL schema. Intended for
/// tests and local runs; nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryMappingRepository {
    by_code: DashMap<String, Mapping>,
    by_long_url: DashMap<String, String>,
    next_id: AtomicI64,
}

impl InMemoryMappingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Mapping>, StoreError> {
        let Some(code) = self.by_long_url.get(long_url).map(|c| c.value().clone()) else {
            return Ok(None);
        };

        Ok(self.by_code.get(&code).map(|m| m.value().clone()))
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<Mapping>, StoreError> {
        Ok(self.by_code.get(short_code).map(|m| m.value().clone()))
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, StoreError> {
        // The long URL entry is claimed first; its shard lock is held until the
        // mapping is written, so two inserts of one URL cannot both succeed.
        let long_url_slot = match self.by_long_url.entry(new_mapping.long_url.clone()) {
            Entry::Occupied(_) => return Err(StoreError::DuplicateLongUrl),
            Entry::Vacant(slot) => slot,
        };

        let mapping = match self.by_code.entry(new_mapping.short_code.clone()) {
            Entry::Occupied(_) => return Err(StoreError::DuplicateShortCode),
            Entry::Vacant(slot) => {
                let mapping = Mapping::new(
                    self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
                    new_mapping.long_url,
                    new_mapping.short_code,
                    Utc::now(),
                );
                slot.insert(mapping.clone());
                mapping
            }
        };

        long_url_slot.insert(mapping.short_code.clone());
        Ok(mapping)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

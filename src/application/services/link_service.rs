//! Short link creation and resolution over a cache-aside store.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::{AppError, StoreError};
use crate::infrastructure::cache::CacheService;
use crate::utils::code_generator::{CodeGenerator, is_reserved};

/// Default number of codes tried before giving up on a new mapping.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Cache key for the long URL to short code direction.
///
/// Both directions share one keyspace, so each key is tagged with its
/// direction. A short code submitted as a long URL never hits a resolved entry.
pub fn long_url_key(long_url: &str) -> String {
    format!("l:{long_url}")
}

/// Cache key for the short code to long URL direction.
pub fn short_code_key(short_code: &str) -> String {
    format!("s:{short_code}")
}

/// Service for shortening long URLs and resolving short codes.
///
/// The store is the only source of truth. The cache is read first and written
/// after every store read or write, but a cache failure never fails a request:
/// reads degrade to misses and writes are dropped with a warning.
///
/// Calls do not coordinate with each other. Two first-time `shorten` calls for
/// the same URL can both reach the insert; the store's unique constraint on the
/// long URL rejects one of them and the loser returns the winner's code.
pub struct LinkService {
    repository: Arc<dyn MappingRepository>,
    cache: Arc<dyn CacheService>,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        repository: Arc<dyn MappingRepository>,
        cache: Arc<dyn CacheService>,
        generator: Arc<dyn CodeGenerator>,
    ) -> Self {
        Self {
            repository,
            cache,
            generator,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets how many generated codes are tried per new mapping (at least one).
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Returns the short code for `long_url`, creating a mapping if none exists.
    ///
    /// # Lookup Order
    ///
    /// 1. Cache, keyed by the long URL
    /// 2. Store; a hit is written back to the cache
    /// 3. New code inserted into the store, then written to the cache
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `long_url` is empty or blank. No cache
    /// or store access happens in that case.
    ///
    /// Returns [`AppError::Store`] if the store fails or every generated code collides.
    pub async fn shorten(&self, long_url: &str) -> Result<String, AppError> {
        if long_url.trim().is_empty() {
            return Err(AppError::bad_request(
                "Long URL is required",
                json!({ "field": "long_url" }),
            ));
        }

        let key = long_url_key(long_url);

        if let Some(code) = self.cached(&key).await {
            return Ok(code);
        }

        if let Some(existing) = self.repository.find_by_long_url(long_url).await? {
            self.remember(&key, &existing.short_code).await;
            return Ok(existing.short_code);
        }

        let mapping = self.create_mapping(long_url).await?;
        self.remember(&key, &mapping.short_code).await;

        Ok(mapping.short_code)
    }

    /// Returns the long URL behind `short_code`.
    ///
    /// # Lookup Order
    ///
    /// 1. Cache, keyed by the short code
    /// 2. Store; a hit is written back to the cache
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists. Nothing is created.
    /// Returns [`AppError::Validation`] for an empty code.
    /// Returns [`AppError::Store`] on store failures.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        if short_code.is_empty() {
            return Err(AppError::bad_request(
                "Short code is required",
                json!({ "field": "short_code" }),
            ));
        }

        let key = short_code_key(short_code);

        if let Some(long_url) = self.cached(&key).await {
            return Ok(long_url);
        }

        let mapping = self
            .repository
            .find_by_short_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("URL not found", json!({ "short_code": short_code }))
            })?;

        self.remember(&key, &mapping.long_url).await;

        Ok(mapping.long_url)
    }

    /// Reports whether the store answers.
    pub async fn store_healthy(&self) -> bool {
        self.repository.health_check().await
    }

    /// Reports whether the cache backend answers.
    pub async fn cache_healthy(&self) -> bool {
        self.cache.health_check().await
    }

    pub fn cache_backend(&self) -> &'static str {
        self.cache.backend()
    }

    /// Inserts a mapping under a fresh code, regenerating on code collisions.
    ///
    /// A reserved code is treated like a collision and uses up an attempt.
    async fn create_mapping(&self, long_url: &str) -> Result<Mapping, AppError> {
        for attempt in 1..=self.max_attempts {
            let code = self.generator.generate();

            if is_reserved(&code) {
                warn!(short_code = %code, attempt, "Generated a reserved code, regenerating");
                continue;
            }

            match self
                .repository
                .insert(NewMapping::new(long_url, code.as_str()))
                .await
            {
                Ok(mapping) => {
                    info!(short_code = %mapping.short_code, attempt, "Created mapping");
                    return Ok(mapping);
                }
                Err(StoreError::DuplicateShortCode) => {
                    warn!(short_code = %code, attempt, "Short code collision, regenerating");
                }
                Err(StoreError::DuplicateLongUrl) => {
                    debug!("Long URL inserted concurrently, returning stored mapping");
                    return self.repository.find_by_long_url(long_url).await?.ok_or_else(|| {
                        AppError::store(
                            "Mapping missing after long URL conflict",
                            json!({ "reason": "conflict_without_row" }),
                        )
                    });
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::store(
            "Failed to generate unique short code",
            json!({ "reason": "too_many_collisions", "attempts": self.max_attempts }),
        ))
    }

    /// Cache read that treats backend failures as a miss.
    async fn cached(&self, key: &str) -> Option<String> {
        match self.cache.get(key).await {
            Ok(Some(value)) => {
                debug!(key, "Cache HIT");
                Some(value)
            }
            Ok(None) => {
                debug!(key, "Cache MISS");
                None
            }
            Err(e) => {
                warn!(key, error = %e, "Cache unavailable, falling back to store");
                None
            }
        }
    }

    /// Cache write whose failure is logged and dropped.
    async fn remember(&self, key: &str, value: &str) {
        if let Err(e) = self.cache.set(key, value).await {
            warn!(key, error = %e, "Failed to cache mapping");
        }
    }
}

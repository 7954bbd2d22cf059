//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::StoreError;

/// PostgreSQL repository for URL mappings.
///
/// Relies on the `url_mappings_long_url_key` and `url_mappings_short_code_key`
/// unique constraints; violations come back as the matching [`StoreError`] variant.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Mapping>, StoreError> {
        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            SELECT id, long_url, short_code, created_at
            FROM url_mappings
            WHERE long_url = $1
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<Mapping>, StoreError> {
        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            SELECT id, long_url, short_code, created_at
            FROM url_mappings
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, StoreError> {
        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            INSERT INTO url_mappings (long_url, short_code)
            VALUES ($1, $2)
            RETURNING id, long_url, short_code, created_at
            "#,
        )
        .bind(&new_mapping.long_url)
        .bind(&new_mapping.short_code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}

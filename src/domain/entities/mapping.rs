//! Mapping entity: one long URL paired with one short code.

use chrono::{DateTime, Utc};

/// A persisted long URL to short code mapping.
///
/// Mappings are created once and never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Mapping {
    pub id: i64,
    pub long_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(id: i64, long_url: String, short_code: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            long_url,
            short_code,
            created_at,
        }
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub long_url: String,
    pub short_code: String,
}

impl NewMapping {
    pub fn new(long_url: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            short_code: short_code.into(),
        }
    }
}

//! Infrastructure layer for external integrations.
//!
//! Implements the contracts defined by the domain layer.
//!
//! - [`cache`] - Cache backends (Redis, in-process, no-op)
//! - [`persistence`] - Mapping store implementations

pub mod cache;
pub mod persistence;

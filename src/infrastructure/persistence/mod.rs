//! Mapping store implementations.
//!
//! - [`PgMappingRepository`] - PostgreSQL via SQLx
//! - [`InMemoryMappingRepository`] - DashMap-backed store for tests and local runs

pub mod memory_mapping_repository;
pub mod pg_mapping_repository;

pub use memory_mapping_repository::InMemoryMappingRepository;
pub use pg_mapping_repository::PgMappingRepository;

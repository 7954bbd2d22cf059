//! Core domain entities.
//!
//! - [`Mapping`] - A stored long URL / short code pair
//! - [`NewMapping`] - Input for creating a mapping

pub mod mapping;

pub use mapping::{Mapping, NewMapping};

//! Utility helpers.
//!
//! - [`code_generator`] - Short code generation

pub mod code_generator;

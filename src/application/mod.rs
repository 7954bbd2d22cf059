//! Application layer services implementing business logic.
//!
//! Services consume repository and cache traits and expose a small API to HTTP
//! handlers.
//!
//! - [`services::link_service::LinkService`] - Cache-aside shortening and resolution

pub mod services;

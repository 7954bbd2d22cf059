//! DTOs for shorten and resolve endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// `long_url` is optional here so that a missing field reaches the service and
/// fails with the same validation error as an empty one.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(max = 2048, message = "Long URL is too long"))]
    pub long_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub short_code: String,
    pub long_url: String,
}

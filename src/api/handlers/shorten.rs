//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the short code for a long URL, creating one on first use.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://www.example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_code": "abc123xy", "short_url": "http://short.ly/abc123xy" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `long_url` is missing, empty or too long.
/// Returns 500 Internal Server Error if the store fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let long_url = payload.long_url.unwrap_or_default();
    let short_code = state.link_service.shorten(&long_url).await?;
    let short_url = state.short_url(&short_code);

    Ok(Json(ShortenResponse {
        short_code,
        short_url,
    }))
}

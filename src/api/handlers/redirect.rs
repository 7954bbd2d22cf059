//! Handlers for short code resolution.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::api::dto::shorten::ResolveResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its long URL.
///
/// # Endpoint
///
/// `GET /api/{short_code}`
///
/// # Response Codes
///
/// - **302 Found**: `Location` carries the long URL
/// - **404 Not Found**: no mapping for the code
/// - **500 Internal Server Error**: store failure, or a stored URL that cannot
///   be sent as a `Location` header
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.link_service.resolve(&short_code).await?;
    let location = HeaderValue::try_from(long_url).map_err(|e| {
        AppError::store(
            "Stored URL is not a valid Location header",
            json!({ "short_code": short_code, "reason": e.to_string() }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

/// Returns the long URL for a short code as JSON.
///
/// # Endpoint
///
/// `GET /api/urls/{short_code}`
pub async fn resolve_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResolveResponse>, AppError> {
    let long_url = state.link_service.resolve(&short_code).await?;

    Ok(Json(ResolveResponse {
        short_code,
        long_url,
    }))
}

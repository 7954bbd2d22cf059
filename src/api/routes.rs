//! API route configuration.

use crate::api::handlers::{redirect_handler, resolve_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /shorten`             - Shorten a long URL
/// - `GET  /urls/{short_code}`   - Resolve a short code as JSON
/// - `GET  /{short_code}`        - Redirect to the long URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls/{short_code}", get(resolve_handler))
        .route("/{short_code}", get(redirect_handler))
}

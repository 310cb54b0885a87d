//! Route handlers organized by resource

pub mod health;
pub mod home;
pub mod snippets;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use super::error::ApiError;

/// Fallback for every unrouted path.
pub async fn not_found() -> impl IntoResponse {
    ApiError::not_found()
}

/// Any method other than GET/HEAD on a read-only route.
pub async fn read_only_method_not_allowed() -> impl IntoResponse {
    (
        [(header::ALLOW, "GET, HEAD")],
        ApiError::client_fault(StatusCode::METHOD_NOT_ALLOWED),
    )
}

//! Snippet endpoints

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::ValidSnippetId;
use crate::http::routes::read_only_method_not_allowed;
use crate::state::AppState;

// Fixed content until create accepts form input.
const PLACEHOLDER_TITLE: &str = "O snail";
const PLACEHOLDER_CONTENT: &str =
    "O snail\nClimb Mount Fuji,\nBut slowly, slowly!\n\n- Kobayashi Issa";
const PLACEHOLDER_EXPIRES_DAYS: i32 = 7;

/// GET /snippet/view?id={id} - plain-text dump of one live snippet
async fn snippet_view(
    State(state): State<AppState>,
    ValidSnippetId(id): ValidSnippetId,
) -> Result<String, ApiError> {
    let snippet = state.store().get(id).await?;
    Ok(snippet.to_string())
}

/// POST /snippet/create - insert and redirect to the new snippet
async fn snippet_create(State(state): State<AppState>) -> Result<Redirect, ApiError> {
    let id = state
        .store()
        .insert(
            PLACEHOLDER_TITLE,
            PLACEHOLDER_CONTENT,
            PLACEHOLDER_EXPIRES_DAYS,
        )
        .await?;

    tracing::info!(%id, "created snippet");
    Ok(Redirect::to(&view_path(id)))
}

/// Any method other than POST on /snippet/create
async fn snippet_create_method_not_allowed() -> impl IntoResponse {
    (
        [(header::ALLOW, "POST")],
        ApiError::client_fault(StatusCode::METHOD_NOT_ALLOWED),
    )
}

fn view_path(id: impl std::fmt::Display) -> String {
    format!("/snippet/view?id={id}")
}

/// Snippet routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/snippet/view",
            get(snippet_view).fallback(read_only_method_not_allowed),
        )
        .route(
            "/snippet/create",
            post(snippet_create).fallback(snippet_create_method_not_allowed),
        )
}

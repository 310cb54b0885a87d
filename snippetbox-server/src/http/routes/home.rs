//! Home page

use axum::{extract::State, routing::get, Router};
use maud::Markup;

use crate::http::error::ApiError;
use crate::http::render;
use crate::http::routes::read_only_method_not_allowed;
use crate::state::AppState;

/// GET / - latest snippets
async fn home(State(state): State<AppState>) -> Result<Markup, ApiError> {
    let snippets = state.store().latest().await?;
    Ok(render::home_page(&snippets))
}

/// Home routes. Only the exact root path matches.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home).fallback(read_only_method_not_allowed))
}

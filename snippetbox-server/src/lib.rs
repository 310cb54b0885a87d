//! snippetbox-server: store and serve short-lived text snippets
//!
//! A Postgres-backed repository with prepared query plans, an Axum router,
//! and centralized error translation.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use db::{DbError, SnippetRepo, SnippetStore};
pub use http::{run_server, ServerConfig};
pub use state::AppState;

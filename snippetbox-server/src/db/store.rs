//! Storage seam between the HTTP handlers and the database
//!
//! Handlers only see `dyn SnippetStore`; production wires in
//! [`SnippetRepo`](super::SnippetRepo).

use async_trait::async_trait;

use crate::models::{Snippet, SnippetId};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// No live snippet matches. Covers both "never existed" and "expired".
    #[error("no matching snippet found")]
    NotFound,

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A query plan could not be prepared at startup.
    #[error("failed to prepare {plan} query plan: {source}")]
    Prepare {
        plan: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Snippet persistence operations.
#[async_trait]
pub trait SnippetStore: Send + Sync {
    /// Insert a snippet expiring `expires_in_days` days from now.
    ///
    /// # Errors
    /// * `DbError::Sqlx` - execution failed or no id came back
    async fn insert(
        &self,
        title: &str,
        content: &str,
        expires_in_days: i32,
    ) -> Result<SnippetId, DbError>;

    /// Fetch a live snippet by id.
    ///
    /// # Errors
    /// * `DbError::NotFound` - absent or expired
    /// * `DbError::Sqlx` - database error
    async fn get(&self, id: SnippetId) -> Result<Snippet, DbError>;

    /// Up to ten live snippets, newest id first.
    async fn latest(&self) -> Result<Vec<Snippet>, DbError>;

    /// Round-trip to the database without touching snippet rows.
    async fn ping(&self) -> Result<(), DbError>;

    /// Release query plans and pooled connections. Called once at shutdown.
    async fn close(&self);
}

//! Snippet repository
//!
//! Owns the pool and three query plans prepared once at startup:
//! - insert: timestamps computed by Postgres (`NOW()`, day interval)
//! - get: live rows only, `NotFound` on zero rows
//! - latest: live rows, newest id first, capped at ten

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::{Stream, TryStreamExt};
use sqlx::postgres::{PgRow, PgStatement};
use sqlx::{Executor, FromRow, PgPool, Row, Statement};

use crate::db::store::{DbError, SnippetStore};
use crate::models::{Snippet, SnippetId};

/// Maximum rows returned by [`SnippetStore::latest`].
pub const LATEST_LIMIT: usize = 10;

const INSERT_SQL: &str = r#"
    INSERT INTO snippets (title, content, created, expires)
    VALUES ($1, $2, NOW(), NOW() + make_interval(days => $3))
    RETURNING id
"#;

const GET_SQL: &str = r#"
    SELECT id, title, content, created, expires
    FROM snippets
    WHERE expires > NOW() AND id = $1
"#;

const LATEST_SQL: &str = r#"
    SELECT id, title, content, created, expires
    FROM snippets
    WHERE expires > NOW()
    ORDER BY id DESC
    LIMIT 10
"#;

/// Positional mapping: (id, title, content, created, expires).
impl<'r> FromRow<'r, PgRow> for Snippet {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let id: i32 = row.try_get(0)?;
        let title: String = row.try_get(1)?;
        let content: String = row.try_get(2)?;
        let created: DateTime<Utc> = row.try_get(3)?;
        let expires: DateTime<Utc> = row.try_get(4)?;

        Ok(Snippet::from_parts(
            SnippetId::from_storage(id),
            title,
            content,
            created,
            expires,
        ))
    }
}

/// Postgres-backed snippet repository
pub struct SnippetRepo {
    pool: PgPool,
    insert: PgStatement<'static>,
    get: PgStatement<'static>,
    latest: PgStatement<'static>,
}

impl SnippetRepo {
    /// Prepare all query plans against `pool`.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Prepare` naming the first plan that failed, e.g. when
    /// the schema is missing or the database is unreachable. Callers treat
    /// this as fatal.
    pub async fn prepare(pool: PgPool) -> Result<Self, DbError> {
        let insert = prepare_plan(&pool, "insert", INSERT_SQL).await?;
        let get = prepare_plan(&pool, "get", GET_SQL).await?;
        let latest = prepare_plan(&pool, "latest", LATEST_SQL).await?;

        tracing::info!("Snippet query plans prepared");
        Ok(Self {
            pool,
            insert,
            get,
            latest,
        })
    }
}

async fn prepare_plan(
    pool: &PgPool,
    plan: &'static str,
    sql: &'static str,
) -> Result<PgStatement<'static>, DbError> {
    let statement = pool
        .prepare(sql)
        .await
        .map_err(|source| DbError::Prepare { plan, source })?;

    tracing::debug!(plan, "prepared query plan");
    Ok(statement)
}

/// Collect every row; an error after some rows still fails the call.
async fn drain_rows<S>(mut rows: S) -> Result<Vec<Snippet>, DbError>
where
    S: Stream<Item = Result<Snippet, sqlx::Error>> + Unpin,
{
    let mut snippets = Vec::with_capacity(LATEST_LIMIT);
    while let Some(snippet) = rows.try_next().await? {
        snippets.push(snippet);
    }

    Ok(snippets)
}

#[async_trait]
impl SnippetStore for SnippetRepo {
    async fn insert(
        &self,
        title: &str,
        content: &str,
        expires_in_days: i32,
    ) -> Result<SnippetId, DbError> {
        let id: i32 = self
            .insert
            .query_scalar()
            .bind(title)
            .bind(content)
            .bind(expires_in_days)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!(id, expires_in_days, "inserted snippet");
        Ok(SnippetId::from_storage(id))
    }

    async fn get(&self, id: SnippetId) -> Result<Snippet, DbError> {
        self.get
            .query_as::<Snippet>()
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DbError::NotFound)
    }

    async fn latest(&self) -> Result<Vec<Snippet>, DbError> {
        drain_rows(self.latest.query_as::<Snippet>().fetch(&self.pool)).await
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        tracing::info!("Closing snippet repository");
        self.pool.close().await;
    }
}

//! Schema bootstrap for the snippets table

use sqlx::PgPool;

use super::DbError;

const CREATE_SNIPPETS_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS snippets (
        id SERIAL PRIMARY KEY,
        title VARCHAR(100) NOT NULL,
        content TEXT NOT NULL,
        created TIMESTAMPTZ NOT NULL,
        expires TIMESTAMPTZ NOT NULL
    )
"#;

/// Create the snippets table and its index if they don't exist yet.
///
/// Idempotent; safe to run on every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring snippets schema...");

    sqlx::query(CREATE_SNIPPETS_SQL).execute(pool).await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_snippets_created ON snippets(created)")
        .execute(pool)
        .await?;

    tracing::info!("Snippets schema ready");
    Ok(())
}

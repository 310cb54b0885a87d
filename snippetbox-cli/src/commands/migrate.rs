//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;
use snippetbox_server::db::ensure_schema;

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Create the snippets table if it is missing
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = args.database.connect().await?;

    ensure_schema(&pool)
        .await
        .context("Failed to create snippets schema")?;

    pool.close().await;
    Ok(())
}

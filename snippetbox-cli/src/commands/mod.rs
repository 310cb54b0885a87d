//! Subcommand implementations

pub mod migrate;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;
use snippetbox_server::db::{PgPool, PgPoolOptions};

/// Database connection options shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, env = "SNIPPETBOX_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    pub async fn connect(&self) -> Result<PgPool> {
        tracing::debug!(max_connections = self.max_connections, "connecting database pool");
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .connect(&self.database_url)
            .await
            .context("Failed to create database pool")
    }
}

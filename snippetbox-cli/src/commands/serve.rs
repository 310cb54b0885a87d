//! HTTP server command

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use snippetbox_server::db::{ensure_schema, SnippetRepo};
use snippetbox_server::http::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// HTTP network address
    #[arg(long, short = 'a', env = "SNIPPETBOX_ADDR", default_value = "127.0.0.1:4000")]
    pub addr: SocketAddr,

    /// Directory of static assets served under /static
    #[arg(long, env = "SNIPPETBOX_STATIC_DIR", default_value = "./ui/static")]
    pub static_dir: PathBuf,

    /// Abort requests running longer than this many seconds (off by default)
    #[arg(long, value_name = "SECS")]
    pub request_timeout: Option<u64>,

    /// Create the snippets table before serving if it is missing
    #[arg(long)]
    pub migrate: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.addr,
            static_dir: self.static_dir.clone(),
            request_timeout: self.request_timeout.map(Duration::from_secs),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let pool = args.database.connect().await?;

    if args.migrate {
        ensure_schema(&pool)
            .await
            .context("Failed to create snippets schema")?;
    }

    // Without its query plans the server can't answer anything.
    let repo = SnippetRepo::prepare(pool)
        .await
        .context("Failed to prepare snippet query plans")?;

    run_server(Arc::new(repo), args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}

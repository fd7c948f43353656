//! Serve command - run the notes server
//!
//! Provides the `notewire serve` CLI command: opens (or creates) the
//! database, optionally seeds starter notes, and runs the HTTP API until
//! interrupted.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tokio_util::sync::CancellationToken;
use tracing::info;

use notewire_core::config::Config;
use notewire_server::{seed, DatabasePool, NoteStore, NotesServer};

use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Address to bind (overrides config)
    #[arg(long)]
    pub bind: Option<String>,

    /// Database file to use (overrides config)
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Seed starter notes into an empty database
    #[arg(long)]
    pub seed: bool,
}

impl ServeCommand {
    pub async fn execute(&self, config: &Config, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(matches!(format, OutputFormat::Json));

        let db_path = self
            .database
            .clone()
            .unwrap_or_else(|| config.server.database_path.clone());
        let bind_addr = self
            .bind
            .clone()
            .unwrap_or_else(|| config.server.bind_addr.clone());

        let pool = DatabasePool::new(&db_path)
            .await
            .context("Failed to open database")?;
        let store = NoteStore::new(pool.pool().clone());

        if self.seed || config.server.seed_on_start {
            let seeded = seed::seed_if_empty(&store)
                .await
                .context("Failed to seed starter notes")?;
            if seeded > 0 {
                formatter.info(&format!("Seeded {seeded} starter notes"));
            }
        }

        let server = NotesServer::bind(&bind_addr, store)
            .await
            .context("Failed to bind notes server")?;
        formatter.success(&format!("Serving notes on http://{}", server.local_addr()?));

        let shutdown = CancellationToken::new();
        let token = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Interrupt received, shutting down");
                token.cancel();
            }
        });

        server.run(shutdown).await
    }
}

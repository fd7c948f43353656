//! List command - render all notes
//!
//! Provides the `notewire list` CLI command: loads the server's notes into
//! the collection and prints the rendered view. On failure the degraded
//! state is shown — an empty list plus the surfaced error — and nothing is
//! retried automatically.

use anyhow::Result;
use clap::Args;

use notewire_core::config::Config;

use crate::commands::build_controller;
use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Args)]
pub struct ListCommand {}

impl ListCommand {
    pub async fn execute(&self, config: &Config, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(matches!(format, OutputFormat::Json));
        let controller = build_controller(config, format);

        // A load failure has already been surfaced as a notice; the view
        // below is then the rendered empty collection.
        let _ = controller.initial_load().await;

        formatter.print_view(&controller.view().await);
        Ok(())
    }
}

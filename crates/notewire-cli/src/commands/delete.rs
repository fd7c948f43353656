//! Delete command - remove a note
//!
//! Provides the `notewire delete <id>` CLI command. The note disappears
//! from the rendered view only after the server acknowledges the delete;
//! a failed delete leaves it visible.

use anyhow::Result;
use clap::Args;

use notewire_core::config::Config;
use notewire_core::domain::NoteId;

use crate::commands::build_controller;
use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Id of the note to delete
    pub id: i64,
}

impl DeleteCommand {
    pub async fn execute(&self, config: &Config, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(matches!(format, OutputFormat::Json));
        let controller = build_controller(config, format);
        let id = NoteId::new(self.id);

        if controller.initial_load().await.is_err() {
            return Ok(());
        }

        if controller.delete(id).await.is_ok() {
            formatter.success(&format!("Deleted note {id}"));
            formatter.print_view(&controller.view().await);
        }
        Ok(())
    }
}

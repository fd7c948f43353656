//! Edit command - update an existing note
//!
//! Provides the `notewire edit <id> <text>` CLI command. The flow mirrors
//! the interactive edit form: the collection is loaded, the edit is begun
//! against the note's id (which pre-fills the current body), and the new
//! text is submitted. A failed update leaves the note as it was.

use anyhow::Result;
use clap::Args;

use notewire_core::config::Config;
use notewire_core::domain::NoteId;

use crate::commands::build_controller;
use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Args)]
pub struct EditCommand {
    /// Id of the note to edit
    pub id: i64,

    /// Replacement text
    #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
    pub text: Vec<String>,
}

impl EditCommand {
    pub async fn execute(&self, config: &Config, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(matches!(format, OutputFormat::Json));
        let controller = build_controller(config, format);
        let id = NoteId::new(self.id);

        if controller.initial_load().await.is_err() {
            return Ok(());
        }

        let Some(form) = controller.begin_edit(id).await else {
            formatter.error(&format!("No note with id {id}"));
            return Ok(());
        };
        tracing::debug!(%id, previous = %form.body, "Editing note");

        let body = self.text.join(" ");
        if controller.submit_edit(id, &body).await.is_ok() {
            formatter.success(&format!("Updated note {id}"));
            formatter.print_view(&controller.view().await);
        }
        Ok(())
    }
}

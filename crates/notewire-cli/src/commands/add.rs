//! Add command - create a note
//!
//! Provides the `notewire add <text>` CLI command. The note is only shown
//! once the server has acknowledged the create and assigned an id; nothing
//! is added optimistically.

use anyhow::Result;
use clap::Args;

use notewire_core::config::Config;

use crate::commands::build_controller;
use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Args)]
pub struct AddCommand {
    /// Text of the new note
    #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
    pub text: Vec<String>,
}

impl AddCommand {
    pub async fn execute(&self, config: &Config, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(matches!(format, OutputFormat::Json));
        let controller = build_controller(config, format);

        // Load first so the rendered view after the add shows the whole
        // list; the create itself does not depend on the load succeeding.
        let _ = controller.initial_load().await;

        let body = self.text.join(" ");
        match controller.create(&body).await {
            Ok(Some(note)) => {
                formatter.success(&format!("Added note {}", note.id()));
                formatter.print_view(&controller.view().await);
            }
            Ok(None) => {
                formatter.warn("Nothing to add: note text is empty");
            }
            // Already surfaced as a notice; the collection is unchanged.
            Err(_) => {}
        }
        Ok(())
    }
}

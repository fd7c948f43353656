//! Show command - display a single note
//!
//! Provides the `notewire show <id>` CLI command. This is a plain
//! single-note fetch; it bypasses the collection since there is no state
//! to keep consistent for a read-only lookup.

use anyhow::Result;
use clap::Args;

use notewire_api::ApiClient;
use notewire_core::config::Config;
use notewire_core::domain::NoteId;

use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Id of the note to show
    pub id: i64,
}

impl ShowCommand {
    pub async fn execute(&self, config: &Config, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(matches!(format, OutputFormat::Json));
        let client = ApiClient::new(config.api.base_url.clone());

        match client.get_note(NoteId::new(self.id)).await {
            Ok(note) => {
                if matches!(format, OutputFormat::Json) {
                    formatter.print_json(&serde_json::json!({
                        "id": note.id(),
                        "body": note.body(),
                    }));
                } else {
                    println!("{}  {}", note.id(), note.body());
                }
            }
            Err(err) => formatter.error(&err.to_string()),
        }
        Ok(())
    }
}

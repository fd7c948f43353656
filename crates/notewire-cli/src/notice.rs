//! Terminal notice sink
//!
//! The CLI-side implementation of the `INoticeSink` port: notices the
//! interaction controller surfaces are printed through the active output
//! formatter instead of a toast area.

use notewire_core::ports::{INoticeSink, Notice, NoticeSeverity};

use crate::output::{get_formatter, OutputFormat};

/// Prints notices via the CLI output formatter
pub struct TerminalNoticeSink {
    format: OutputFormat,
}

impl TerminalNoticeSink {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

#[async_trait::async_trait]
impl INoticeSink for TerminalNoticeSink {
    async fn notify(&self, notice: &Notice) -> anyhow::Result<()> {
        let formatter = get_formatter(matches!(self.format, OutputFormat::Json));
        let line = format!("{}: {}", notice.title, notice.body);
        match notice.severity {
            NoticeSeverity::Info => formatter.info(&line),
            NoticeSeverity::Warning => formatter.warn(&line),
            NoticeSeverity::Error => formatter.error(&line),
        }
        Ok(())
    }
}

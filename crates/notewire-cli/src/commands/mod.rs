//! CLI command implementations
//!
//! One module per subcommand, each exposing a clap `Args` struct with an
//! async `execute`. Shared wiring (config loading, controller construction)
//! lives here.

use std::path::Path;
use std::sync::Arc;

use notewire_api::HttpNoteTransport;
use notewire_client::Controller;
use notewire_core::config::Config;

use crate::notice::TerminalNoticeSink;
use crate::output::OutputFormat;

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod serve;
pub mod show;

/// Loads configuration from the given path, or the default location
pub fn load_config(path: Option<&str>) -> Config {
    match path {
        Some(path) => Config::load_or_default(Path::new(path)),
        None => Config::load_or_default(&Config::default_path()),
    }
}

/// Builds the interaction controller against the configured server
///
/// All collaborators are injected here: the HTTP transport from the config's
/// base URL, and the terminal notice sink for surfaced failures.
pub(crate) fn build_controller(config: &Config, format: OutputFormat) -> Controller {
    let transport = Arc::new(HttpNoteTransport::new(config.api.base_url.clone()));
    let notices = Arc::new(TerminalNoticeSink::new(format));
    Controller::new(transport, notices)
}

//! Notewire CLI - Command-line interface for Notewire
//!
//! Provides commands for:
//! - Listing, adding, editing, and deleting notes against a running server
//! - Showing a single note
//! - Running the notes server itself

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod notice;
mod output;

use commands::{
    add::AddCommand, delete::DeleteCommand, edit::EditCommand, list::ListCommand,
    serve::ServeCommand, show::ShowCommand,
};
use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "notewire", version, about = "Self-hosted notes with a terminal client")]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all notes
    List(ListCommand),
    /// Add a new note
    Add(AddCommand),
    /// Edit an existing note
    Edit(EditCommand),
    /// Delete a note
    Delete(DeleteCommand),
    /// Show a single note
    Show(ShowCommand),
    /// Run the notes server
    Serve(ServeCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    let config = commands::load_config(cli.config.as_deref());

    match cli.command {
        Commands::List(cmd) => cmd.execute(&config, format).await,
        Commands::Add(cmd) => cmd.execute(&config, format).await,
        Commands::Edit(cmd) => cmd.execute(&config, format).await,
        Commands::Delete(cmd) => cmd.execute(&config, format).await,
        Commands::Show(cmd) => cmd.execute(&config, format).await,
        Commands::Serve(cmd) => cmd.execute(&config, format).await,
    }
}

//! sitewrite CLI - sitemap and sitemap index XML generation
//!
//! This is the library half of the `sitewrite` binary. Command
//! implementations live in separate modules; [`run`] parses arguments,
//! installs logging and dispatches.

use anyhow::Result;
use clap::Parser;
use sitewrite_core::SitemapConfig;

mod cli;
mod commands;
pub mod error;
mod utils;

use cli::{Cli, Commands};
use utils::{initialize_logging, resolve_config};

/// Execute the sitewrite CLI with the current process arguments.
///
/// # Errors
///
/// Returns an error if configuration cannot be resolved or the command fails.
/// Use [`error::exit_code_from_error`] to map it onto an exit code.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    let config = resolve_config(&cli)?;
    execute_command(cli, config).await
}

async fn execute_command(cli: Cli, config: SitemapConfig) -> Result<()> {
    match cli.command {
        Commands::Render { manifest, file } => {
            commands::render_file(&manifest, &file, config).await?;
        },

        Commands::Single { entries } => {
            commands::render_single(&entries, config).await?;
        },

        Commands::Index { names } => {
            commands::print_index(names, config)?;
        },

        Commands::Build { manifest, out } => {
            let summary = commands::build_all(&manifest, &out, config, cli.quiet).await?;
            tracing::debug!(
                sitemaps = summary.sitemaps.len(),
                index = %summary.index.display(),
                "Build finished"
            );
        },
    }

    Ok(())
}

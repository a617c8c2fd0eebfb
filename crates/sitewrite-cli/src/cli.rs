//! # CLI Structure and Argument Parsing
//!
//! This module defines the command-line interface for `sitewrite`. The CLI is
//! built using `clap` with derive macros.
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Render one file from a manifest (registry mode)
//! sitewrite --root https://acme.com/sitemaps render sitemaps.json products.xml
//!
//! # Render the index for the same manifest
//! sitewrite --root https://acme.com/sitemaps render sitemaps.json sitemap_index.xml
//!
//! # Serialize a single entry list
//! sitewrite single entries.json
//!
//! # Index over explicit names
//! sitewrite --root https://acme.com/sitemaps index static products
//!
//! # Write every file of a manifest plus the index
//! sitewrite --config sitewrite.toml build sitemaps.toml --out public/sitemaps
//! ```
//!
//! ## Configuration Precedence
//!
//! Built-in defaults, then the `--config` file, then `--root` and
//! `--index-file`. Each flag can also be supplied through its environment
//! variable.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for the `sitewrite` command
#[derive(Parser, Clone, Debug)]
#[command(name = "sitewrite")]
#[command(version)]
#[command(about = "sitewrite - Sitemap and sitemap index XML generation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Path to a TOML configuration file. Also via `SITEWRITE_CONFIG`.
    #[arg(long, global = true, value_name = "FILE", env = "SITEWRITE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL for sitemap index entries. Also via `SITEWRITE_ROOT`.
    #[arg(long, global = true, value_name = "URL", env = "SITEWRITE_ROOT")]
    pub root: Option<String>,

    /// Identifier of the index file. Also via `SITEWRITE_INDEX_FILE`.
    #[arg(
        long = "index-file",
        global = true,
        value_name = "NAME",
        env = "SITEWRITE_INDEX_FILE"
    )]
    pub index_file: Option<String>,
}

/// Available subcommands for the `sitewrite` CLI
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Render one requested file from a manifest of named sitemaps
    Render {
        /// Manifest file (.json or .toml)
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,

        /// Requested file name, e.g. `products.xml` or `sitemap_index.xml`
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Serialize a single entry list
    Single {
        /// Entry list file (.json or .toml)
        #[arg(value_name = "ENTRIES")]
        entries: PathBuf,
    },

    /// Print a sitemap index over the given names
    Index {
        /// Sitemap names; `.xml` is appended when missing
        #[arg(value_name = "NAMES", required = true)]
        names: Vec<String>,
    },

    /// Write every sitemap of a manifest and the index into a directory
    Build {
        /// Manifest file (.json or .toml)
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,

        /// Output directory (created if missing)
        #[arg(short, long, value_name = "DIR")]
        out: PathBuf,
    },
}

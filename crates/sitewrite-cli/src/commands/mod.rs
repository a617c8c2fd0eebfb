//! Command implementations for the sitewrite CLI
//!
//! Each command lives in its own submodule. Commands write documents to
//! stdout (or files) and leave diagnostics to `tracing` on stderr.

mod build;
mod index;
mod render;
mod single;

pub use build::{BuildSummary, execute as build_all};
pub use index::execute as print_index;
pub use render::execute as render_file;
pub use single::execute as render_single;

use std::io::Write;

/// Write a document to stdout followed by a newline.
fn emit(document: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(document.as_bytes())?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}

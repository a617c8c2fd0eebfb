//! Index command implementation

use anyhow::{Result, anyhow};
use sitewrite_core::{SitemapConfig, SitemapIndex, serialize_sitemap_index};

use super::emit;
use crate::error::CliError;

/// Print an index listing `names` under the configured root.
pub fn execute(names: Vec<String>, config: SitemapConfig) -> Result<()> {
    if config.root.is_empty() {
        return Err(CliError::usage(anyhow!(
            "No root configured; pass --root or set `root` in the config file"
        ))
        .into());
    }

    emit(&serialize_sitemap_index(&SitemapIndex {
        root: config.root,
        sitemaps: names,
    }))
}

//! Single command implementation

use anyhow::{Context, Result};
use sitewrite_core::{EntryList, RouterRequest, SitemapConfig, SitemapRouter, StaticGenerator};
use std::path::Path;

use super::emit;

/// Serialize one entry list through the single-shot convention.
pub async fn execute(entries: &Path, config: SitemapConfig) -> Result<()> {
    let entries = EntryList::load(entries)
        .with_context(|| format!("Failed to load entries {}", entries.display()))?
        .into_entries();
    let generator = StaticGenerator::new(entries);

    let document = SitemapRouter::new(config)
        .route(RouterRequest::Single(&generator))
        .await?;

    // Single-shot routing always yields a document
    document.map_or(Ok(()), |xml| emit(&xml))
}

//! Render command implementation

use anyhow::{Context, Result, anyhow};
use sitewrite_core::{GeneratorSource, RouterRequest, SitemapConfig, SitemapManifest, SitemapRouter};
use std::path::Path;

use super::emit;
use crate::error::CliError;

/// Resolve `file` against the sitemaps of a manifest and print the document.
pub async fn execute(manifest: &Path, file: &str, config: SitemapConfig) -> Result<()> {
    let registry = SitemapManifest::load(manifest)
        .with_context(|| format!("Failed to load manifest {}", manifest.display()))?
        .into_registry();
    let router = SitemapRouter::new(config);

    let document = router
        .route(RouterRequest::Lookup {
            name: file,
            source: GeneratorSource::Registry(&registry),
        })
        .await
        .with_context(|| format!("Failed to render {file}"))?;

    match document {
        Some(xml) => emit(&xml),
        None => Err(CliError::not_found(anyhow!("Sitemap '{file}' not found")).into()),
    }
}

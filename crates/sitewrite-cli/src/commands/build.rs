//! Build command implementation

use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use sitewrite_core::{SitemapConfig, SitemapManifest, SitemapRouter};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Files written by one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Sitemap files, in manifest order.
    pub sitemaps: Vec<PathBuf>,
    /// The index file.
    pub index: PathBuf,
}

/// Write every sitemap of `manifest` and the index into `out`.
///
/// Each file goes through the router exactly as an HTTP request for that
/// file name would.
pub async fn execute(
    manifest: &Path,
    out: &Path,
    config: SitemapConfig,
    quiet: bool,
) -> Result<BuildSummary> {
    if config.root.is_empty() {
        return Err(CliError::usage(anyhow!(
            "No root configured; pass --root or set `root` in the config file"
        ))
        .into());
    }

    let manifest = SitemapManifest::load(manifest)
        .with_context(|| format!("Failed to load manifest {}", manifest.display()))?;
    let index_id = config.index_id().to_string();

    let mut names = Vec::with_capacity(manifest.sitemaps.len());
    for name in manifest.names() {
        if name.contains(['/', '\\']) {
            return Err(CliError::usage(anyhow!(
                "Sitemap name '{name}' cannot contain path separators"
            ))
            .into());
        }
        if name == index_id {
            tracing::warn!(name, "Skipping sitemap shadowed by the index file");
            continue;
        }
        names.push(name.to_string());
    }

    let registry = manifest.into_registry();
    let router = SitemapRouter::new(config);

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory {}", out.display()))?;

    let mut sitemaps = Vec::with_capacity(names.len());
    for name in &names {
        let file = format!("{name}.xml");
        let xml = router
            .render_file(&file, &registry)
            .await
            .with_context(|| format!("Failed to render {file}"))?
            .ok_or_else(|| CliError::not_found(anyhow!("Sitemap '{file}' not found")))?;
        sitemaps.push(write_file(out, &file, &xml)?);
    }

    let index_file = format!("{index_id}.xml");
    let xml = router
        .render_file(&index_file, &registry)
        .await?
        .ok_or_else(|| CliError::not_found(anyhow!("Index '{index_file}' not found")))?;
    let index = write_file(out, &index_file, &xml)?;

    if !quiet {
        eprintln!(
            "{} Wrote {} sitemap file(s) and {} to {}",
            "✓".green(),
            sitemaps.len(),
            index_file.bold(),
            out.display()
        );
    }

    Ok(BuildSummary { sitemaps, index })
}

fn write_file(out: &Path, file: &str, xml: &str) -> Result<PathBuf> {
    let path = out.join(file);
    fs::write(&path, xml).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = xml.len(), "Wrote sitemap file");
    Ok(path)
}

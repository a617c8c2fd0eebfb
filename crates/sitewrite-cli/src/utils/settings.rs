//! Effective router configuration for a CLI invocation.

use anyhow::{Context, Result};
use sitewrite_core::SitemapConfig;

use crate::cli::Cli;

/// Merge defaults, the config file and flag overrides, in that order.
///
/// # Errors
///
/// Returns an error if the `--config` file cannot be read or parsed.
pub fn resolve_config(cli: &Cli) -> Result<SitemapConfig> {
    let mut config = match &cli.config {
        Some(path) => SitemapConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SitemapConfig::default(),
    };

    if let Some(root) = &cli.root {
        config.root.clone_from(root);
    }
    if let Some(index_file) = &cli.index_file {
        config.index_file.clone_from(index_file);
    }

    tracing::debug!(root = %config.root, index = config.index_id(), "Resolved config");
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_defaults_without_config() {
        let cli = parse(&["sitewrite", "--root", "https://acme.com", "index", "a"]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.root, "https://acme.com");
        assert_eq!(config.index_id(), "sitemap_index");
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sitewrite.toml");
        fs::write(
            &path,
            "root = \"https://from-file.com\"\nindexFile = \"file_index\"\n",
        )
        .unwrap();
        let path = path.to_string_lossy().into_owned();

        let from_file = parse(&["sitewrite", "--config", &path, "index", "a"]);
        let config = resolve_config(&from_file).unwrap();
        assert_eq!(config.root, "https://from-file.com");
        assert_eq!(config.index_id(), "file_index");

        let overridden = parse(&[
            "sitewrite",
            "--config",
            &path,
            "--index-file",
            "all.xml",
            "index",
            "a",
        ]);
        let config = resolve_config(&overridden).unwrap();
        assert_eq!(config.root, "https://from-file.com");
        assert_eq!(config.index_id(), "all");
    }

    #[test]
    fn test_unreadable_config_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml").to_string_lossy().into_owned();
        let cli = parse(&["sitewrite", "--config", &path, "index", "a"]);

        let err = resolve_config(&cli).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
        assert_eq!(crate::error::exit_code_from_error(&err), 2);
    }
}

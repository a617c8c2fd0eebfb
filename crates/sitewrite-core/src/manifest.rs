//! File formats describing sitemaps to generate.
//!
//! A [`SitemapManifest`] names several sitemap files and their entries; it
//! becomes a [`GeneratorRegistry`] for registry-mode routing. An
//! [`EntryList`] holds the entries of a single file for the single-shot
//! convention.
//!
//! Manifests are JSON or TOML, chosen by file extension. Entry fields use the
//! same names as [`SitemapEntry`]'s serde form (`url`, `lastModified`,
//! `changeFrequency`, ...). Dates must be quoted strings in TOML.
//!
//! ```json
//! {
//!   "sitemaps": [
//!     { "name": "static", "entries": [{ "url": "https://acme.com", "priority": 1 }] },
//!     { "name": "products", "entries": [{ "url": "https://acme.com/product/1" }] }
//!   ]
//! }
//! ```

use crate::generator::{GeneratorRegistry, StaticGenerator};
use crate::types::{SitemapEntry, SitemapFile};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Supported manifest encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// `.json`
    Json,
    /// `.toml`
    Toml,
}

impl ManifestFormat {
    /// Detect the format from a file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(Error::Config(format!(
                "Unsupported manifest format: {} (expected .json or .toml)",
                path.display()
            ))),
        }
    }

    fn parse<T: for<'de> Deserialize<'de>>(self, content: &str) -> Result<T> {
        match self {
            Self::Json => Ok(serde_json::from_str(content)?),
            Self::Toml => Ok(toml::from_str(content)?),
        }
    }
}

fn read(path: &Path) -> Result<(ManifestFormat, String)> {
    let format = ManifestFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    Ok((format, content))
}

/// One named sitemap file in a manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSitemap {
    /// Identifier, i.e. the file name without `.xml`.
    pub name: String,
    /// Entries of the file.
    #[serde(default)]
    pub entries: SitemapFile,
}

/// An ordered collection of named sitemap files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SitemapManifest {
    /// Sitemap files in index order.
    #[serde(default)]
    pub sitemaps: Vec<NamedSitemap>,
}

impl SitemapManifest {
    /// Parse a manifest from a string in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the content does not match the
    /// manifest shape, or [`Error::Config`] if a name is empty or repeated.
    pub fn parse(content: &str, format: ManifestFormat) -> Result<Self> {
        let manifest: Self = format.parse(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load a manifest from a `.json` or `.toml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, or fails to parse.
    pub fn load(path: &Path) -> Result<Self> {
        let (format, content) = read(path)?;
        let manifest = Self::parse(&content, format)?;
        tracing::debug!(
            path = %path.display(),
            sitemaps = manifest.sitemaps.len(),
            "Loaded manifest"
        );
        Ok(manifest)
    }

    /// Sitemap names in manifest order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sitemaps.iter().map(|sitemap| sitemap.name.as_str())
    }

    /// Build a registry whose generators yield the stored entries.
    #[must_use]
    pub fn into_registry(self) -> GeneratorRegistry {
        let mut registry = GeneratorRegistry::new();
        for sitemap in self.sitemaps {
            registry.insert(sitemap.name, StaticGenerator::new(sitemap.entries));
        }
        registry
    }

    fn validate(&self) -> Result<()> {
        for (position, sitemap) in self.sitemaps.iter().enumerate() {
            if sitemap.name.trim().is_empty() {
                return Err(Error::Config(format!(
                    "Sitemap #{} has an empty name",
                    position + 1
                )));
            }
            if self.sitemaps[..position]
                .iter()
                .any(|earlier| earlier.name == sitemap.name)
            {
                return Err(Error::Config(format!(
                    "Sitemap '{}' is listed more than once",
                    sitemap.name
                )));
            }
        }
        Ok(())
    }
}

/// Entries of one sitemap file: either `{ "entries": [...] }` or a bare array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryList {
    /// A bare list of entries (JSON only).
    Bare(SitemapFile),
    /// A table with an `entries` key.
    Wrapped {
        /// The entries.
        entries: SitemapFile,
    },
}

impl EntryList {
    /// Parse an entry list from a string in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the content is not an entry list.
    pub fn parse(content: &str, format: ManifestFormat) -> Result<Self> {
        format.parse(content)
    }

    /// Load an entry list from a `.json` or `.toml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, or fails to parse.
    pub fn load(path: &Path) -> Result<Self> {
        let (format, content) = read(path)?;
        Self::parse(&content, format)
    }

    /// The contained entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<SitemapEntry> {
        match self {
            Self::Bare(entries) | Self::Wrapped { entries } => entries,
        }
    }
}

//! Router configuration.
//!
//! Configuration is stored in TOML with camelCase keys:
//!
//! ```toml
//! root = "https://acme.com/sitemaps"
//! indexFile = "sitemap_index"
//! ```
//!
//! Only `root` is meaningful to set; `indexFile` defaults to
//! `"sitemap_index"`. A trailing `.xml` on `indexFile` is ignored.
//!
//! ```rust
//! use sitewrite_core::SitemapConfig;
//!
//! let config = SitemapConfig::from_toml_str(r#"root = "https://acme.com""#)?;
//! assert_eq!(config.index_id(), "sitemap_index");
//! # Ok::<(), sitewrite_core::Error>(())
//! ```

use crate::xml::XML_SUFFIX;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default identifier of the sitemap index file.
pub const DEFAULT_INDEX_FILE: &str = "sitemap_index";

/// Settings shared by every routing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapConfig {
    /// Base URL prefixed to each `<name>.xml` in the sitemap index.
    #[serde(default)]
    pub root: String,

    /// Identifier of the index file, without the `.xml` suffix.
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

fn default_index_file() -> String {
    DEFAULT_INDEX_FILE.to_string()
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            root: String::new(),
            index_file: default_index_file(),
        }
    }
}

impl SitemapConfig {
    /// Configuration with the given root and the default index file.
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Override the index file identifier.
    #[must_use]
    pub fn with_index_file(mut self, index_file: impl Into<String>) -> Self {
        self.index_file = index_file.into();
        self
    }

    /// The index identifier that requests are compared against.
    ///
    /// ```rust
    /// use sitewrite_core::SitemapConfig;
    ///
    /// let config = SitemapConfig::default().with_index_file("all.xml");
    /// assert_eq!(config.index_id(), "all");
    /// ```
    #[must_use]
    pub fn index_id(&self) -> &str {
        self.index_file
            .strip_suffix(XML_SUFFIX)
            .unwrap_or(&self.index_file)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the TOML is invalid.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), root = %config.root, "Loaded config");
        Ok(config)
    }

    /// Render this configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))
    }
}

//! Routing a requested sitemap file name to a document.
//!
//! The router answers one question per request: given a file name such as
//! `products.xml`, which document should be served? It either renders the
//! sitemap index, runs the matching generator and serializes its entries, or
//! reports that nothing matches (`Ok(None)`), which callers turn into a 404.
//!
//! ## Calling conventions
//!
//! - **Single-shot**: one generator, invoked unconditionally.
//! - **Registry**: a [`GeneratorRegistry`] of named generators.
//! - **Legacy**: a [`ParametrizedSitemaps`] implementation that receives the
//!   identifier and enumerates all identifiers for the index.
//!
//! ```
//! use sitewrite_core::generator::{GeneratorRegistry, from_fn};
//! use sitewrite_core::{SitemapConfig, SitemapEntry, SitemapRouter};
//!
//! # async fn example() -> sitewrite_core::Result<()> {
//! let registry = GeneratorRegistry::new()
//!     .with("static", from_fn(|| Ok(vec![SitemapEntry::new("https://acme.com")])));
//!
//! let router = SitemapRouter::new(SitemapConfig::new("https://acme.com/sitemaps"));
//!
//! let index = router.render_file("sitemap_index.xml", &registry).await?;
//! assert!(index.unwrap().contains("https://acme.com/sitemaps/static.xml"));
//!
//! assert!(router.render_file("missing.xml", &registry).await?.is_none());
//! # Ok(())
//! # }
//! ```

use crate::config::SitemapConfig;
use crate::generator::{GeneratorRegistry, ParametrizedSitemaps, SitemapGenerator};
use crate::types::SitemapIndex;
use crate::xml::{XML_SUFFIX, serialize_sitemap, serialize_sitemap_index};
use crate::{Error, Result};
use tracing::instrument;

/// Identifier reported for failures of a single-shot generator.
const SINGLE_ID: &str = "sitemap";

/// Where named generators come from.
#[derive(Clone, Copy)]
pub enum GeneratorSource<'a> {
    /// Explicit mapping of names to generators.
    Registry(&'a GeneratorRegistry),
    /// A parametrized generator plus an identifier enumerator.
    Legacy(&'a dyn ParametrizedSitemaps),
}

/// One routing request.
#[derive(Clone, Copy)]
pub enum RouterRequest<'a> {
    /// Invoke this generator and serialize its result; no name resolution.
    Single(&'a dyn SitemapGenerator),
    /// Resolve a requested file name against a generator source.
    Lookup {
        /// Requested file name, including the `.xml` suffix.
        name: &'a str,
        /// Generators to resolve against.
        source: GeneratorSource<'a>,
    },
}

/// Outcome of inspecting a requested file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// The name does not end with `.xml`.
    SuffixInvalid,
    /// The name is the configured index file.
    IndexRequested,
    /// Look up a generator with this identifier.
    Lookup(String),
}

/// Resolves requested sitemap file names to XML documents.
///
/// Holds only configuration; every request is independent.
#[derive(Debug, Clone)]
pub struct SitemapRouter {
    config: SitemapConfig,
}

impl SitemapRouter {
    /// Create a router with the given configuration.
    #[must_use]
    pub const fn new(config: SitemapConfig) -> Self {
        Self { config }
    }

    /// The router's configuration.
    #[must_use]
    pub const fn config(&self) -> &SitemapConfig {
        &self.config
    }

    /// Decide what a requested file name refers to, without running anything.
    ///
    /// ```
    /// use sitewrite_core::{RouteDecision, SitemapConfig, SitemapRouter};
    ///
    /// let router = SitemapRouter::new(SitemapConfig::new("https://acme.com"));
    /// assert_eq!(router.decide("static"), RouteDecision::SuffixInvalid);
    /// assert_eq!(router.decide("sitemap_index.xml"), RouteDecision::IndexRequested);
    /// assert_eq!(router.decide("static.xml"), RouteDecision::Lookup("static".to_string()));
    /// ```
    #[must_use]
    pub fn decide(&self, name: &str) -> RouteDecision {
        let Some(id) = name.strip_suffix(XML_SUFFIX) else {
            return RouteDecision::SuffixInvalid;
        };

        if id == self.config.index_id() {
            RouteDecision::IndexRequested
        } else {
            RouteDecision::Lookup(id.to_string())
        }
    }

    /// Resolve a request to a document, or `None` when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Generator`] if a generator fails and
    /// [`Error::MalformedEntry`] if its entries cannot be serialized.
    pub async fn route(&self, request: RouterRequest<'_>) -> Result<Option<String>> {
        match request {
            RouterRequest::Single(generator) => self.render_single(generator).await.map(Some),
            RouterRequest::Lookup {
                name,
                source: GeneratorSource::Registry(registry),
            } => self.render_file(name, registry).await,
            RouterRequest::Lookup {
                name,
                source: GeneratorSource::Legacy(sitemaps),
            } => self.render_legacy(name, sitemaps).await,
        }
    }

    /// Invoke a single generator and serialize its entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Generator`] if the generator fails and
    /// [`Error::MalformedEntry`] if its entries cannot be serialized.
    #[instrument(skip_all)]
    pub async fn render_single(&self, generator: &dyn SitemapGenerator) -> Result<String> {
        let entries = generator
            .generate()
            .await
            .map_err(|source| Error::Generator {
                id: SINGLE_ID.to_string(),
                source,
            })?;
        tracing::debug!(entries = entries.len(), "Generated sitemap");
        serialize_sitemap(&entries)
    }

    /// Resolve `name` against a registry of named generators.
    ///
    /// The index lists every registered identifier in insertion order. A
    /// registered identifier equal to the index identifier is never invoked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Generator`] if the matched generator fails and
    /// [`Error::MalformedEntry`] if its entries cannot be serialized.
    #[instrument(skip(self, registry), fields(generators = registry.len()))]
    pub async fn render_file(
        &self,
        name: &str,
        registry: &GeneratorRegistry,
    ) -> Result<Option<String>> {
        match self.decide(name) {
            RouteDecision::SuffixInvalid => {
                tracing::debug!("Rejected sitemap request without .xml suffix");
                Ok(None)
            },
            RouteDecision::IndexRequested => {
                if registry.contains(self.config.index_id()) {
                    tracing::warn!(
                        id = self.config.index_id(),
                        "Generator shadowed by the sitemap index"
                    );
                }
                let sitemaps = registry
                    .names()
                    .filter(|id| *id != self.config.index_id())
                    .map(str::to_string)
                    .collect();
                Ok(Some(self.index(sitemaps)))
            },
            RouteDecision::Lookup(id) => {
                let Some(generator) = registry.get(&id) else {
                    tracing::debug!(id = %id, "No generator registered");
                    return Ok(None);
                };
                let entries = generator
                    .generate()
                    .await
                    .map_err(|source| Error::Generator {
                        id: id.clone(),
                        source,
                    })?;
                tracing::debug!(id = %id, entries = entries.len(), "Generated sitemap");
                serialize_sitemap(&entries).map(Some)
            },
        }
    }

    /// Resolve `name` against a parametrized generator and its enumerator.
    ///
    /// The enumerator is consulted afresh on every index request. A missing
    /// `root` makes the index unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Generator`] if either callable fails and
    /// [`Error::MalformedEntry`] if the entries cannot be serialized.
    #[instrument(skip(self, sitemaps))]
    pub async fn render_legacy(
        &self,
        name: &str,
        sitemaps: &dyn ParametrizedSitemaps,
    ) -> Result<Option<String>> {
        match self.decide(name) {
            RouteDecision::SuffixInvalid => {
                tracing::debug!("Rejected sitemap request without .xml suffix");
                Ok(None)
            },
            RouteDecision::IndexRequested => {
                if self.config.root.is_empty() {
                    tracing::debug!("No root configured; index unavailable");
                    return Ok(None);
                }
                let ids = sitemaps
                    .sitemap_ids()
                    .await
                    .map_err(|source| Error::Generator {
                        id: self.config.index_id().to_string(),
                        source,
                    })?;
                Ok(Some(self.index(ids)))
            },
            RouteDecision::Lookup(id) => {
                let entries = sitemaps
                    .sitemap(&id)
                    .await
                    .map_err(|source| Error::Generator {
                        id: id.clone(),
                        source,
                    })?;
                match entries {
                    Some(entries) => serialize_sitemap(&entries).map(Some),
                    None => {
                        tracing::debug!(id = %id, "Parametrized generator returned nothing");
                        Ok(None)
                    },
                }
            },
        }
    }

    fn index(&self, sitemaps: Vec<String>) -> String {
        serialize_sitemap_index(&SitemapIndex {
            root: self.config.root.clone(),
            sitemaps,
        })
    }
}

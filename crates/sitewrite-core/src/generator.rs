//! Sitemap generators and the registry that names them.
//!
//! A generator is anything that can produce a [`SitemapFile`] on demand.
//! Async closures implement [`SitemapGenerator`] directly; synchronous
//! closures are wrapped with [`from_fn`]. Generators may fail with any error
//! type; the failure is handed back to the caller unchanged.
//!
//! ```
//! use sitewrite_core::generator::{GeneratorRegistry, from_fn};
//! use sitewrite_core::{BoxError, SitemapEntry};
//!
//! let registry = GeneratorRegistry::new()
//!     .with("static", from_fn(|| Ok(vec![SitemapEntry::new("https://acme.com")])))
//!     .with("products", || async {
//!         Ok::<_, BoxError>(vec![SitemapEntry::new("https://acme.com/product/1")])
//!     });
//!
//! assert_eq!(registry.names().collect::<Vec<_>>(), ["static", "products"]);
//! ```

use crate::error::BoxError;
use crate::types::SitemapFile;
use async_trait::async_trait;
use std::fmt;
use std::future::Future;

/// Result type produced by caller-supplied generators.
pub type GeneratorResult<T = SitemapFile> = std::result::Result<T, BoxError>;

/// Produces the entries of one sitemap file.
#[async_trait]
pub trait SitemapGenerator: Send + Sync {
    /// Produce the entries. May suspend while fetching data.
    async fn generate(&self) -> GeneratorResult;
}

#[async_trait]
impl<F, Fut> SitemapGenerator for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = GeneratorResult> + Send + 'static,
{
    async fn generate(&self) -> GeneratorResult {
        (self)().await
    }
}

/// A generator backed by a synchronous closure. See [`from_fn`].
pub struct FnGenerator<F>(F);

/// Wrap a synchronous closure as a [`SitemapGenerator`].
pub fn from_fn<F>(f: F) -> FnGenerator<F>
where
    F: Fn() -> GeneratorResult + Send + Sync,
{
    FnGenerator(f)
}

#[async_trait]
impl<F> SitemapGenerator for FnGenerator<F>
where
    F: Fn() -> GeneratorResult + Send + Sync,
{
    async fn generate(&self) -> GeneratorResult {
        (self.0)()
    }
}

/// A generator that hands out copies of a fixed entry list.
#[derive(Debug, Clone)]
pub struct StaticGenerator {
    entries: SitemapFile,
}

impl StaticGenerator {
    /// Serve `entries` on every call.
    #[must_use]
    pub const fn new(entries: SitemapFile) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl SitemapGenerator for StaticGenerator {
    async fn generate(&self) -> GeneratorResult {
        Ok(self.entries.clone())
    }
}

/// Legacy generator pair: one parametrized generator plus an enumerator.
///
/// This mirrors frameworks where a single function receives the requested
/// identifier and another lists every valid identifier.
#[async_trait]
pub trait ParametrizedSitemaps: Send + Sync {
    /// Produce the entries for `id`, or `None` if there is no such sitemap.
    async fn sitemap(&self, id: &str) -> GeneratorResult<Option<SitemapFile>>;

    /// List every identifier, in the order the index should show them.
    ///
    /// Called afresh for each index request.
    async fn sitemap_ids(&self) -> GeneratorResult<Vec<String>>;
}

/// Insertion-ordered mapping from sitemap identifier to generator.
///
/// Identifiers are file names without the `.xml` suffix. Inserting an
/// identifier that already exists replaces its generator but keeps its
/// original position.
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: Vec<(String, Box<dyn SitemapGenerator>)>,
}

impl GeneratorRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator under `id`.
    pub fn insert(&mut self, id: impl Into<String>, generator: impl SitemapGenerator + 'static) {
        let id = id.into();
        let generator: Box<dyn SitemapGenerator> = Box::new(generator);
        if let Some(slot) = self.generators.iter_mut().find(|(name, _)| *name == id) {
            slot.1 = generator;
        } else {
            self.generators.push((id, generator));
        }
    }

    /// Builder form of [`GeneratorRegistry::insert`].
    #[must_use]
    pub fn with(mut self, id: impl Into<String>, generator: impl SitemapGenerator + 'static) -> Self {
        self.insert(id, generator);
        self
    }

    /// Look up a generator by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&dyn SitemapGenerator> {
        self.generators
            .iter()
            .find(|(name, _)| name == id)
            .map(|(_, generator)| generator.as_ref())
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Registered identifiers in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.generators.iter().map(|(name, _)| name.as_str())
    }

    /// Number of registered generators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

//! # sitewrite-core
//!
//! Core functionality for sitewrite - serializing sitemap descriptions into
//! sitemap-protocol XML and routing requested sitemap files to generators.
//!
//! Search engines read sitemaps as `<urlset>` documents, optionally extended
//! with image, video and `xhtml:link` alternates, and as `<sitemapindex>`
//! documents that list other sitemap files. This crate builds both from plain
//! Rust values and decides which document a request like `products.xml`
//! should receive.
//!
//! ## Architecture
//!
//! - **Types**: the entry model ([`SitemapEntry`], [`VideoEntry`], ...)
//! - **XML**: [`serialize_sitemap`] and [`serialize_sitemap_index`]
//! - **Generators**: [`SitemapGenerator`] and the [`GeneratorRegistry`]
//! - **Routing**: [`SitemapRouter`] resolves file names to documents
//! - **Configuration**: [`SitemapConfig`] with TOML loading
//! - **Manifests**: [`SitemapManifest`] describes sitemaps in JSON or TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use sitewrite_core::{ChangeFrequency, SitemapEntry, serialize_sitemap};
//!
//! let entries = vec![
//!     SitemapEntry::new("https://acme.com")
//!         .with_change_frequency(ChangeFrequency::Yearly)
//!         .with_priority(1.0),
//!     SitemapEntry::new("https://acme.com/about").with_priority(0.8),
//! ];
//!
//! let xml = serialize_sitemap(&entries)?;
//! assert!(xml.contains("<loc>https://acme.com/about</loc>"));
//! # Ok::<(), sitewrite_core::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result<T, Error>`]. A request for a file
//! that no generator serves is not an error; routing returns `Ok(None)`:
//!
//! ```rust
//! use sitewrite_core::{GeneratorRegistry, SitemapConfig, SitemapResponse, SitemapRouter};
//!
//! # async fn serve() -> sitewrite_core::Result<()> {
//! let router = SitemapRouter::new(SitemapConfig::new("https://acme.com"));
//! let document = router.render_file("missing.xml", &GeneratorRegistry::new()).await?;
//! assert_eq!(SitemapResponse::from_document(document).status, 404);
//! # Ok(())
//! # }
//! ```

/// Router configuration
pub mod config;
/// Error types and result aliases
pub mod error;
/// Sitemap generators and the generator registry
pub mod generator;
/// JSON/TOML descriptions of sitemap files
pub mod manifest;
/// Transport-neutral response envelope
pub mod response;
/// File name routing
pub mod router;
/// Sitemap entry model
pub mod types;
/// XML serialization
pub mod xml;

// Re-export commonly used types
pub use config::{DEFAULT_INDEX_FILE, SitemapConfig};
pub use error::{BoxError, Error, Result};
pub use generator::{
    GeneratorRegistry, GeneratorResult, ParametrizedSitemaps, SitemapGenerator, StaticGenerator,
    from_fn,
};
pub use manifest::{EntryList, ManifestFormat, NamedSitemap, SitemapManifest};
pub use response::SitemapResponse;
pub use router::{GeneratorSource, RouteDecision, RouterRequest, SitemapRouter};
pub use types::{
    Alternates, ChangeFrequency, DateField, FamilyFriendly, SitemapEntry, SitemapFile,
    SitemapIndex, VideoEntry,
};
pub use xml::{escape_xml, format_priority, serialize_sitemap, serialize_sitemap_index};

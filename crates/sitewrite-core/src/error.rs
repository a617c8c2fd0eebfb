//! Error types and handling for sitewrite-core operations.
//!
//! This module provides a single error type for everything that can go wrong
//! while turning sitemap descriptions into XML. A requested file that has no
//! generator is *not* an error: routing reports it as `Ok(None)` so callers can
//! map it onto a 404-equivalent.
//!
//! ## Error Categories
//!
//! - **Malformed entries**: an entry is missing a required value, so the whole
//!   document is rejected
//! - **Generator failures**: a caller-supplied generator failed; the original
//!   error is kept as the `source()`
//! - **Configuration errors**: unreadable or invalid config files
//! - **I/O and serialization errors**: manifest and config loading
//!
//! ```rust
//! use sitewrite_core::{Error, SitemapEntry, serialize_sitemap};
//!
//! match serialize_sitemap(&[SitemapEntry::new("")]) {
//!     Err(Error::MalformedEntry { reason, .. }) => println!("rejected: {reason}"),
//!     Err(e) => println!("{} error: {e}", e.category()),
//!     Ok(xml) => println!("{xml}"),
//! }
//! ```

use thiserror::Error;

/// Boxed error returned by caller-supplied generators.
///
/// Generators can fail for any reason (database down, remote API error); the
/// router carries the failure through untouched inside [`Error::Generator`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for sitewrite-core operations.
///
/// All fallible public functions return `Result<T, Error>`. Source chains are
/// preserved, so `std::error::Error::source` reaches the underlying failure.
#[derive(Error, Debug)]
pub enum Error {
    /// An entry is missing a required value or carries an unusable one.
    ///
    /// Raised for an empty `url`, a video without `thumbnail_loc`, `title` or
    /// `description`, an empty image or alternate location, or a non-finite
    /// priority. Serialization is all-or-nothing, so no document is produced.
    #[error("Malformed entry '{url}': {reason}")]
    MalformedEntry {
        /// URL of the offending entry (may be empty).
        url: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A caller-supplied generator failed.
    ///
    /// The generator's own error is stored unchanged as the source.
    #[error("Generator for '{id}' failed: {source}")]
    Generator {
        /// Identifier of the sitemap being generated.
        id: String,
        /// The generator's error.
        #[source]
        source: BoxError,
    },

    /// Configuration is invalid or inaccessible.
    ///
    /// ## Common Causes
    ///
    /// - Invalid TOML syntax in the config file
    /// - Config file path does not exist
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failed.
    ///
    /// Occurs when a manifest or entry list is not valid JSON/TOML or does
    /// not match the entry model.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic error for uncategorized failures.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Build a [`Error::MalformedEntry`] for the given entry URL.
    pub(crate) fn malformed(url: &str, reason: impl Into<String>) -> Self {
        Self::MalformedEntry {
            url: url.to_string(),
            reason: reason.into(),
        }
    }

    /// Get the error category as a string identifier.
    ///
    /// Useful for structured logging and for mapping errors onto exit codes:
    ///
    /// - `"malformed_entry"` - rejected entry data
    /// - `"generator"` - caller-supplied generator failure
    /// - `"config"` - configuration problems
    /// - `"io"` - file system operations
    /// - `"serialization"` - JSON/TOML decoding
    /// - `"other"` - uncategorized errors
    ///
    /// ```rust
    /// use sitewrite_core::Error;
    ///
    /// let error = Error::Config("missing root".to_string());
    /// assert_eq!(error.category(), "config");
    /// ```
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::MalformedEntry { .. } => "malformed_entry",
            Self::Generator { .. } => "generator",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
            Self::Other(_) => "other",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(
    clippy::panic,
    clippy::disallowed_macros,
    clippy::unwrap_used,
    clippy::unnecessary_wraps
)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io;

    #[derive(Debug)]
    struct UpstreamDown;

    impl std::fmt::Display for UpstreamDown {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("upstream store unavailable")
        }
    }

    impl std::error::Error for UpstreamDown {}

    #[test]
    fn test_error_display_formatting() {
        let error = Error::malformed("https://acme.com", "video is missing a title");
        assert_eq!(
            error.to_string(),
            "Malformed entry 'https://acme.com': video is missing a title"
        );

        let error = Error::Config("missing field".to_string());
        assert!(error.to_string().contains("Configuration error"));

        let error = Error::Other("plain".to_string());
        assert_eq!(error.to_string(), "plain");
    }

    #[test]
    fn test_error_categories() {
        let error_categories = vec![
            (Error::malformed("", "empty url"), "malformed_entry"),
            (
                Error::Generator {
                    id: "products".to_string(),
                    source: Box::new(UpstreamDown),
                },
                "generator",
            ),
            (Error::Config("test".to_string()), "config"),
            (Error::Io(io::Error::other("test")), "io"),
            (Error::Serialization("test".to_string()), "serialization"),
            (Error::Other("test".to_string()), "other"),
        ];

        for (error, expected_category) in error_categories {
            assert_eq!(error.category(), expected_category);
        }
    }

    #[test]
    fn test_generator_error_keeps_source_unchanged() {
        let error = Error::Generator {
            id: "products".to_string(),
            source: Box::new(UpstreamDown),
        };

        assert!(error.to_string().contains("products"));
        let source = std::error::Error::source(&error).unwrap();
        assert!(source.downcast_ref::<UpstreamDown>().is_some());
        assert_eq!(source.to_string(), "upstream store unavailable");
    }

    #[test]
    fn test_error_from_json_error() {
        let json_err = serde_json::from_str::<Vec<String>>("{not json").unwrap_err();
        let error: Error = json_err.into();
        assert_eq!(error.category(), "serialization");
    }

    #[test]
    fn test_error_chain_source() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_error.into();

        let source = std::error::Error::source(&error);
        assert!(source.is_some());
        assert!(source.unwrap().to_string().contains("access denied"));
    }

    proptest! {
        #[test]
        fn test_malformed_error_preserves_arbitrary_urls(url in r".{0,200}") {
            let error = Error::malformed(&url, "empty url");
            prop_assert!(error.to_string().contains(&url));
            prop_assert_eq!(error.category(), "malformed_entry");
        }
    }

    #[test]
    fn test_error_size() {
        let error_size = std::mem::size_of::<Error>();
        assert!(error_size <= 64, "Error type too large: {error_size} bytes");
    }
}

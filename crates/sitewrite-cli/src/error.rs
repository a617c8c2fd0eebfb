//! CLI error handling with semantic exit codes.
//!
//! Errors are categorized so that scripts and CI pipelines can tell a missing
//! sitemap apart from bad input.
//!
//! # Exit Code Categories
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | Success | Command completed successfully |
//! | 1 | `Internal` | Unexpected error, including generator failures |
//! | 2 | `Usage` | Invalid arguments or configuration |
//! | 3 | `NotFound` | Requested sitemap or input file not found |
//! | 4 | `InvalidInput` | Malformed entries or undecodable manifests |
//!
//! # Usage
//!
//! ```bash
//! sitewrite render sitemaps.json products.xml > products.xml
//! case $? in
//!     0) echo "Rendered" ;;
//!     3) echo "No such sitemap" ;;
//!     *) echo "Other error" ;;
//! esac
//! ```

use std::fmt;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Unexpected or internal error (exit code 1).
    Internal = 1,

    /// Invalid arguments or configuration (exit code 2).
    Usage = 2,

    /// Requested resource not found (exit code 3).
    ///
    /// Use when a requested sitemap file has no generator or an input file
    /// does not exist.
    NotFound = 3,

    /// Malformed input data (exit code 4).
    ///
    /// Use for entries that cannot be serialized and manifests that do not
    /// decode.
    InvalidInput = 4,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }

    /// Get a short description of this error category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Internal => "internal error",
            Self::Usage => "usage error",
            Self::NotFound => "not found",
            Self::InvalidInput => "invalid input",
        }
    }

    /// Category of a library error.
    #[must_use]
    pub fn from_core(err: &sitewrite_core::Error) -> Self {
        use sitewrite_core::Error;

        match err {
            Error::MalformedEntry { .. } | Error::Serialization(_) => Self::InvalidInput,
            Error::Config(_) => Self::Usage,
            Error::Io(io) if io.kind() == std::io::ErrorKind::NotFound => Self::NotFound,
            Error::Generator { .. } | Error::Io(_) | Error::Other(_) => Self::Internal,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A CLI error with a semantic category for exit code mapping.
///
/// Wraps an `anyhow::Error` with an `ErrorCategory` while preserving the
/// full error chain.
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    /// Create a usage error.
    pub fn usage(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Usage, source)
    }

    /// Create a not-found error.
    pub fn not_found(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::NotFound, source)
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.category.exit_code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Determine the exit code from an `anyhow::Error`.
///
/// The first `CliError` or `sitewrite_core::Error` found in the chain decides
/// the category; anything else is internal.
#[must_use]
pub fn exit_code_from_error(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return cli_err.exit_code();
        }
        if let Some(core_err) = cause.downcast_ref::<sitewrite_core::Error>() {
            return ErrorCategory::from_core(core_err).exit_code();
        }
    }

    ErrorCategory::Internal.exit_code()
}

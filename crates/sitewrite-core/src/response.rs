//! Transport-neutral response envelope for serving sitemap documents.

use std::fmt;

/// Media type of every sitemap document.
pub const CONTENT_TYPE: &str = "application/xml";

/// Body of a 404 response.
pub const NOT_FOUND_BODY: &str = "Not Found";

/// A status, headers and body ready to hand to any HTTP layer.
///
/// ```
/// use sitewrite_core::SitemapResponse;
///
/// let response = SitemapResponse::xml("<urlset/>").with_header("Cache-Control", "max-age=3600");
/// assert_eq!(response.status, 200);
/// assert_eq!(response.header("content-type"), Some("application/xml"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapResponse {
    /// HTTP-style status code.
    pub status: u16,
    /// Headers in insertion order. Names compare case-insensitively.
    pub headers: Vec<(String, String)>,
    /// Document body.
    pub body: String,
}

impl SitemapResponse {
    /// A 200 response carrying an XML document.
    #[must_use]
    pub fn xml(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: vec![("Content-Type".to_string(), CONTENT_TYPE.to_string())],
            body: body.into(),
        }
    }

    /// A 404 response.
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            status: 404,
            headers: vec![("Content-Type".to_string(), "text/plain".to_string())],
            body: NOT_FOUND_BODY.to_string(),
        }
    }

    /// Map a routing result onto a response.
    #[must_use]
    pub fn from_document(document: Option<String>) -> Self {
        document.map_or_else(Self::not_found, Self::xml)
    }

    /// Set a header, replacing any existing header of the same name.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self
            .headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            *slot = (name, value);
        } else {
            self.headers.push((name, value));
        }
        self
    }

    /// Value of the named header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Whether the status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

impl fmt::Display for SitemapResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}

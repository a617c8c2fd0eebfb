//! Sitemap XML serialization.
//!
//! Turns a list of [`SitemapEntry`] values into a `<urlset>` document and a
//! list of sitemap names into a `<sitemapindex>` document. Output is compact
//! (no insignificant whitespace) and deterministic: the same input always
//! produces byte-identical XML.
//!
//! ## Quick Start
//!
//! ```
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
//! assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?><urlset"#));
//! assert!(xml.contains("<url><loc>https://acme.com</loc><changefreq>yearly</changefreq><priority>1</priority></url>"));
//! # Ok::<(), sitewrite_core::Error>(())
//! ```
//!
//! ## Namespaces
//!
//! The root element always declares the sitemap namespace. The image, video
//! and xhtml namespaces are declared only when at least one entry actually
//! uses the matching extension, so plain sitemaps stay plain.

use crate::types::{DateField, SitemapEntry, SitemapIndex, VideoEntry};
use crate::{Error, Result};
use std::borrow::Cow;
use std::fmt::Display;
use tracing::instrument;

/// The sitemaps.org protocol namespace.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Google image extension namespace.
pub const IMAGE_NS: &str = "http://www.google.com/schemas/sitemap-image/1.1";

/// Google video extension namespace.
pub const VIDEO_NS: &str = "http://www.google.com/schemas/sitemap-video/1.1";

/// XHTML namespace used for `hreflang` alternates.
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Suffix every sitemap file name carries.
pub const XML_SUFFIX: &str = ".xml";

/// Extension namespaces observed while serializing entries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Namespaces {
    /// At least one entry has a non-empty image list.
    pub image: bool,
    /// At least one entry has a non-empty video list.
    pub video: bool,
    /// At least one entry has at least one alternate language.
    pub xhtml: bool,
}

impl Namespaces {
    /// Scan entries and record which extensions they use.
    #[must_use]
    pub fn of(entries: &[SitemapEntry]) -> Self {
        let mut namespaces = Self::default();
        for entry in entries {
            namespaces.observe(entry);
        }
        namespaces
    }

    fn observe(&mut self, entry: &SitemapEntry) {
        self.image |= entry.has_images();
        self.video |= entry.has_videos();
        self.xhtml |= entry.has_alternates();
    }

    /// Namespace declarations for the `<urlset>` start tag.
    #[must_use]
    pub fn root_attributes(self) -> String {
        let mut attrs = format!(r#"xmlns="{SITEMAP_NS}""#);
        if self.image {
            attrs.push_str(&format!(r#" xmlns:image="{IMAGE_NS}""#));
        }
        if self.video {
            attrs.push_str(&format!(r#" xmlns:video="{VIDEO_NS}""#));
        }
        if self.xhtml {
            attrs.push_str(&format!(r#" xmlns:xhtml="{XHTML_NS}""#));
        }
        attrs
    }
}

/// Escape the five reserved XML characters.
///
/// `&`, `<`, `>`, `"` and `'` become `&amp;`, `&lt;`, `&gt;`, `&quot;` and
/// `&apos;`. Nothing else is touched, and no CDATA sections are used.
///
/// ```
/// use sitewrite_core::escape_xml;
///
/// assert_eq!(escape_xml("a&b <c> \"d\" 'e'"), "a&amp;b &lt;c&gt; &quot;d&quot; &apos;e&apos;");
/// assert_eq!(escape_xml("plain"), "plain");
/// ```
#[must_use]
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}

/// Format a priority rounded to one decimal place, in its shortest form.
///
/// Rounds half away from zero on the tenths value, so `0.05` becomes `0.1`
/// and `0.85` becomes `0.9`. Whole numbers drop the fraction: `1.0` renders
/// as `1`. The digits are produced from the rounded integer, so no float
/// representation noise can leak into the output.
///
/// ```
/// use sitewrite_core::format_priority;
///
/// assert_eq!(format_priority(1.0), "1");
/// assert_eq!(format_priority(0.5), "0.5");
/// assert_eq!(format_priority(0.85), "0.9");
/// assert_eq!(format_priority(0.05), "0.1");
/// ```
#[must_use]
pub fn format_priority(priority: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let tenths = (priority * 10.0).round() as i64;
    let sign = if tenths < 0 { "-" } else { "" };
    let magnitude = tenths.unsigned_abs();
    let (whole, fraction) = (magnitude / 10, magnitude % 10);

    if fraction == 0 {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{fraction}")
    }
}

/// Serialize entries into a complete `<urlset>` document.
///
/// Each `<url>` holds, in order: `loc`, `lastmod`, `changefreq`, `priority`,
/// one `xhtml:link` per alternate language, one `image:image` per image and
/// one `video:video` per video. Absent optional fields are omitted.
///
/// # Errors
///
/// Returns [`Error::MalformedEntry`] if any entry lacks a URL, has a video
/// missing a required field, has an empty image or alternate location, or has
/// a non-finite priority. No partial document is returned.
#[instrument(skip_all, fields(entries = entries.len()))]
pub fn serialize_sitemap(entries: &[SitemapEntry]) -> Result<String> {
    let mut namespaces = Namespaces::default();
    let mut body = String::with_capacity(entries.len() * 128);

    for entry in entries {
        write_entry(&mut body, entry)?;
        namespaces.observe(entry);
    }

    let mut xml = String::with_capacity(body.len() + 320);
    xml.push_str(XML_DECLARATION);
    xml.push_str("<urlset ");
    xml.push_str(&namespaces.root_attributes());
    xml.push('>');
    xml.push_str(&body);
    xml.push_str("</urlset>");

    tracing::debug!(
        image = namespaces.image,
        video = namespaces.video,
        xhtml = namespaces.xhtml,
        bytes = xml.len(),
        "Serialized sitemap"
    );

    Ok(xml)
}

/// Serialize a `<sitemapindex>` document listing the given sitemap files.
///
/// Names get a `.xml` suffix if they lack one and are joined to `root` with
/// a single trailing slash removed. Only the base sitemap namespace is
/// declared. An empty name list still yields a valid document.
///
/// ```
/// use sitewrite_core::{SitemapIndex, serialize_sitemap_index};
///
/// let xml = serialize_sitemap_index(&SitemapIndex {
///     root: "https://acme.com/sitemaps/".to_string(),
///     sitemaps: vec!["static".to_string()],
/// });
/// assert!(xml.contains("<sitemap><loc>https://acme.com/sitemaps/static.xml</loc></sitemap>"));
/// ```
#[must_use]
#[instrument(skip_all, fields(sitemaps = index.sitemaps.len()))]
pub fn serialize_sitemap_index(index: &SitemapIndex) -> String {
    let base = index.root.strip_suffix('/').unwrap_or(&index.root);
    let base = escape_xml(base);

    let mut xml = String::with_capacity(160 + index.sitemaps.len() * (base.len() + 48));
    xml.push_str(XML_DECLARATION);
    xml.push_str(r#"<sitemapindex xmlns=""#);
    xml.push_str(SITEMAP_NS);
    xml.push_str(r#"">"#);

    for name in &index.sitemaps {
        let file_name = sitemap_file_name(name);
        xml.push_str("<sitemap><loc>");
        xml.push_str(&base);
        xml.push('/');
        xml.push_str(&escape_xml(&file_name));
        xml.push_str("</loc></sitemap>");
    }

    xml.push_str("</sitemapindex>");

    tracing::debug!(bytes = xml.len(), "Serialized sitemap index");
    xml
}

/// Append `.xml` to a sitemap name unless it already ends with it.
#[must_use]
pub fn sitemap_file_name(name: &str) -> Cow<'_, str> {
    if name.ends_with(XML_SUFFIX) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("{name}{XML_SUFFIX}"))
    }
}

fn write_entry(out: &mut String, entry: &SitemapEntry) -> Result<()> {
    if entry.url.trim().is_empty() {
        return Err(Error::malformed(&entry.url, "url is required"));
    }

    out.push_str("<url>");
    push_text(out, "loc", &entry.url);

    if let Some(last_modified) = &entry.last_modified {
        push_date(out, "lastmod", last_modified);
    }

    if let Some(frequency) = entry.change_frequency {
        push_text(out, "changefreq", frequency.as_str());
    }

    if let Some(priority) = entry.priority {
        if !priority.is_finite() {
            return Err(Error::malformed(
                &entry.url,
                format!("priority must be a finite number, got {priority}"),
            ));
        }
        push_value(out, "priority", format_priority(priority));
    }

    if let Some(alternates) = &entry.alternates {
        for (language, href) in &alternates.languages {
            if href.trim().is_empty() {
                return Err(Error::malformed(
                    &entry.url,
                    format!("alternate for '{language}' has no href"),
                ));
            }
            out.push_str(r#"<xhtml:link rel="alternate" hreflang=""#);
            out.push_str(&escape_xml(language));
            out.push_str(r#"" href=""#);
            out.push_str(&escape_xml(href));
            out.push_str(r#""/>"#);
        }
    }

    for image in entry.images.iter().flatten() {
        if image.trim().is_empty() {
            return Err(Error::malformed(&entry.url, "image location is empty"));
        }
        out.push_str("<image:image>");
        push_text(out, "image:loc", image);
        out.push_str("</image:image>");
    }

    for video in entry.videos.iter().flatten() {
        write_video(out, &entry.url, video)?;
    }

    out.push_str("</url>");
    Ok(())
}

fn write_video(out: &mut String, url: &str, video: &VideoEntry) -> Result<()> {
    let required = [
        ("thumbnail_loc", &video.thumbnail_loc),
        ("title", &video.title),
        ("description", &video.description),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(Error::malformed(url, format!("video is missing {field}")));
        }
    }

    out.push_str("<video:video>");
    push_text(out, "video:thumbnail_loc", &video.thumbnail_loc);
    push_text(out, "video:title", &video.title);
    push_text(out, "video:description", &video.description);

    if let Some(content_loc) = &video.content_loc {
        push_text(out, "video:content_loc", content_loc);
    }
    if let Some(player_loc) = &video.player_loc {
        push_text(out, "video:player_loc", player_loc);
    }
    if let Some(duration) = video.duration {
        push_value(out, "video:duration", duration);
    }
    if let Some(view_count) = video.view_count {
        push_value(out, "video:view_count", view_count);
    }
    if let Some(tag) = &video.tag {
        push_text(out, "video:tag", tag);
    }
    if let Some(rating) = video.rating {
        push_value(out, "video:rating", rating);
    }
    if let Some(expiration) = &video.expiration_date {
        push_date(out, "video:expiration_date", expiration);
    }
    if let Some(publication) = &video.publication_date {
        push_date(out, "video:publication_date", publication);
    }
    if let Some(family_friendly) = &video.family_friendly {
        push_text(out, "video:family_friendly", &family_friendly.to_string());
    }

    out.push_str("</video:video>");
    Ok(())
}

/// `<name>{escaped text}</name>`
fn push_text(out: &mut String, name: &str, text: &str) {
    push_value(out, name, escape_xml(text));
}

fn push_date(out: &mut String, name: &str, value: &DateField) {
    push_text(out, name, &value.to_iso_string());
}

/// `<name>{value}</name>` without escaping; numbers and pre-escaped text only.
fn push_value(out: &mut String, name: &str, value: impl Display) {
    out.push('<');
    out.push_str(name);
    out.push('>');
    out.push_str(&value.to_string());
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::types::{ChangeFrequency, FamilyFriendly};
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;
    use quick_xml::Reader;
    use quick_xml::events::Event;

    /// Walk the document with a real XML reader. Returns the root element
    /// name and every text node, unescaped.
    fn read_back(xml: &str) -> (String, Vec<String>) {
        let mut reader = Reader::from_str(xml);
        let mut root = None;
        let mut depth = 0usize;
        let mut texts = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    if depth == 0 {
                        assert!(root.is_none(), "document has more than one root");
                        root = Some(String::from_utf8_lossy(e.name().as_ref()).to_string());
                    }
                    depth += 1;
                },
                Ok(Event::End(_)) => depth -= 1,
                Ok(Event::Text(e)) => texts.push(e.unescape().unwrap().to_string()),
                Ok(Event::Eof) => break,
                Err(e) => panic!("not well-formed: {e}\n{xml}"),
                _ => {},
            }
        }

        assert_eq!(depth, 0, "unbalanced document");
        (root.unwrap(), texts)
    }

    fn root_tag(xml: &str) -> &str {
        let start = xml.find("<urlset").unwrap();
        let end = start + xml[start..].find('>').unwrap();
        &xml[start..=end]
    }

    fn full_entry() -> SitemapEntry {
        let mut video = VideoEntry::new(
            "https://acme.com/thumb.jpg",
            "example",
            "this is the description",
        );
        video.content_loc = Some("https://acme.com/video.mp4".to_string());
        video.player_loc = Some("https://acme.com/player".to_string());
        video.duration = Some(600);
        video.view_count = Some(1200);
        video.tag = Some("demo".to_string());
        video.rating = Some(4.5);
        video.expiration_date = Some(DateField::from("2030-01-01"));
        video.publication_date = Some(DateField::from(
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
        ));
        video.family_friendly = Some(FamilyFriendly::Flag(true));

        SitemapEntry::new("https://acme.com/blog")
            .with_last_modified("2024-01-15")
            .with_change_frequency(ChangeFrequency::Weekly)
            .with_priority(0.5)
            .with_alternate("es", "https://acme.com/es")
            .with_alternate("de", "https://acme.com/de")
            .with_image("https://acme.com/image.jpg")
            .with_video(video)
    }

    #[test]
    fn test_empty_sitemap() {
        let xml = serialize_sitemap(&[]).unwrap();
        assert_eq!(
            xml,
            r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"></urlset>"#
        );
        let (root, texts) = read_back(&xml);
        assert_eq!(root, "urlset");
        assert!(texts.is_empty());
    }

    #[test]
    fn test_basic_entries_exact_output() {
        let entries = vec![
            SitemapEntry::new("https://acme.com")
                .with_last_modified(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
                .with_change_frequency(ChangeFrequency::Yearly)
                .with_priority(1.0),
            SitemapEntry::new("https://acme.com/about"),
        ];

        let xml = serialize_sitemap(&entries).unwrap();
        assert_eq!(
            xml,
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8"?>"#,
                r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
                "<url><loc>https://acme.com</loc><lastmod>2024-01-15T10:30:00.000Z</lastmod>",
                "<changefreq>yearly</changefreq><priority>1</priority></url>",
                "<url><loc>https://acme.com/about</loc></url>",
                "</urlset>"
            )
        );
    }

    #[test]
    fn test_full_entry_element_order() {
        let xml = serialize_sitemap(&[full_entry()]).unwrap();

        let expected_body = concat!(
            "<url><loc>https://acme.com/blog</loc>",
            "<lastmod>2024-01-15</lastmod>",
            "<changefreq>weekly</changefreq>",
            "<priority>0.5</priority>",
            r#"<xhtml:link rel="alternate" hreflang="de" href="https://acme.com/de"/>"#,
            r#"<xhtml:link rel="alternate" hreflang="es" href="https://acme.com/es"/>"#,
            "<image:image><image:loc>https://acme.com/image.jpg</image:loc></image:image>",
            "<video:video>",
            "<video:thumbnail_loc>https://acme.com/thumb.jpg</video:thumbnail_loc>",
            "<video:title>example</video:title>",
            "<video:description>this is the description</video:description>",
            "<video:content_loc>https://acme.com/video.mp4</video:content_loc>",
            "<video:player_loc>https://acme.com/player</video:player_loc>",
            "<video:duration>600</video:duration>",
            "<video:view_count>1200</video:view_count>",
            "<video:tag>demo</video:tag>",
            "<video:rating>4.5</video:rating>",
            "<video:expiration_date>2030-01-01</video:expiration_date>",
            "<video:publication_date>2024-01-15T10:30:00.000Z</video:publication_date>",
            "<video:family_friendly>yes</video:family_friendly>",
            "</video:video>",
            "</url>"
        );
        assert!(xml.contains(expected_body), "unexpected body:\n{xml}");

        assert_eq!(
            root_tag(&xml),
            concat!(
                r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9""#,
                r#" xmlns:image="http://www.google.com/schemas/sitemap-image/1.1""#,
                r#" xmlns:video="http://www.google.com/schemas/sitemap-video/1.1""#,
                r#" xmlns:xhtml="http://www.w3.org/1999/xhtml">"#
            )
        );
        read_back(&xml);
    }

    #[test]
    fn test_namespaces_declared_independently() {
        let images_only = vec![
            SitemapEntry::new("https://acme.com"),
            SitemapEntry::new("https://acme.com/gallery").with_image("https://acme.com/1.jpg"),
        ];
        let tag = root_tag(&serialize_sitemap(&images_only).unwrap()).to_string();
        assert!(tag.contains("xmlns:image"));
        assert!(!tag.contains("xmlns:video"));
        assert!(!tag.contains("xmlns:xhtml"));

        let alternates_only =
            vec![SitemapEntry::new("https://acme.com").with_alternate("fr", "https://acme.fr")];
        let tag = root_tag(&serialize_sitemap(&alternates_only).unwrap()).to_string();
        assert!(!tag.contains("xmlns:image"));
        assert!(!tag.contains("xmlns:video"));
        assert!(tag.contains("xmlns:xhtml"));
    }

    #[test]
    fn test_empty_extension_lists_do_not_declare_namespaces() {
        let mut entry = SitemapEntry::new("https://acme.com");
        entry.images = Some(Vec::new());
        entry.videos = Some(Vec::new());
        entry.alternates = Some(crate::types::Alternates::default());

        let xml = serialize_sitemap(&[entry]).unwrap();
        assert_eq!(
            root_tag(&xml),
            r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#
        );
        assert!(xml.contains("<url><loc>https://acme.com</loc></url>"));
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let entry = SitemapEntry::new("https://acme.com/search?q=a&b=<c>")
            .with_alternate("x-'\"", "https://acme.com/?a=1&b=2")
            .with_video(VideoEntry::new(
                "https://acme.com/t.jpg",
                "Tom & Jerry's \"best\"",
                "<b>bold</b>",
            ));

        let xml = serialize_sitemap(&[entry]).unwrap();
        assert!(xml.contains("<loc>https://acme.com/search?q=a&amp;b=&lt;c&gt;</loc>"));
        assert!(xml.contains(r#"hreflang="x-&apos;&quot;" href="https://acme.com/?a=1&amp;b=2""#));
        assert!(xml.contains("<video:title>Tom &amp; Jerry&apos;s &quot;best&quot;</video:title>"));
        assert!(xml.contains("<video:description>&lt;b&gt;bold&lt;/b&gt;</video:description>"));

        let (_, texts) = read_back(&xml);
        assert!(texts.contains(&"https://acme.com/search?q=a&b=<c>".to_string()));
        assert!(texts.contains(&"Tom & Jerry's \"best\"".to_string()));
    }

    #[test]
    fn test_text_dates_pass_through_escaped() {
        let entry = SitemapEntry::new("https://acme.com").with_last_modified("today & <now>");
        let xml = serialize_sitemap(&[entry]).unwrap();
        assert!(xml.contains("<lastmod>today &amp; &lt;now&gt;</lastmod>"));
    }

    #[test]
    fn test_priority_rounding() {
        let cases = [
            (1.0, "1"),
            (0.0, "0"),
            (0.5, "0.5"),
            (0.8, "0.8"),
            (0.85, "0.9"),
            (0.05, "0.1"),
            (0.04, "0"),
            (0.15, "0.2"),
            (0.25, "0.3"),
            (0.123, "0.1"),
            (0.96, "1"),
            (-0.05, "-0.1"),
        ];

        for (input, expected) in cases {
            assert_eq!(format_priority(input), expected, "priority {input}");
        }
    }

    #[test]
    fn test_zero_valued_video_numbers_are_kept() {
        let mut video = VideoEntry::new("https://acme.com/t.jpg", "t", "d");
        video.duration = Some(0);
        video.view_count = Some(0);
        let xml =
            serialize_sitemap(&[SitemapEntry::new("https://acme.com").with_video(video)]).unwrap();
        assert!(xml.contains("<video:duration>0</video:duration>"));
        assert!(xml.contains("<video:view_count>0</video:view_count>"));
    }

    #[test]
    fn test_rejects_empty_url() {
        let entries = vec![SitemapEntry::new("https://acme.com"), SitemapEntry::new("  ")];
        let err = serialize_sitemap(&entries).unwrap_err();
        assert!(matches!(err, Error::MalformedEntry { .. }));
    }

    #[test]
    fn test_rejects_video_without_title() {
        let entry = SitemapEntry::new("https://acme.com").with_video(VideoEntry::new(
            "https://acme.com/t.jpg",
            "",
            "description",
        ));
        match serialize_sitemap(&[entry]) {
            Err(Error::MalformedEntry { url, reason }) => {
                assert_eq!(url, "https://acme.com");
                assert!(reason.contains("title"));
            },
            other => panic!("expected malformed entry, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_non_finite_priority() {
        let entry = SitemapEntry::new("https://acme.com").with_priority(f64::NAN);
        assert!(serialize_sitemap(&[entry]).is_err());
    }

    #[test]
    fn test_rejects_empty_image_location() {
        let entry = SitemapEntry::new("https://acme.com").with_image("");
        assert!(serialize_sitemap(&[entry]).is_err());
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let entries = vec![full_entry(), SitemapEntry::new("https://acme.com/about")];
        let first = serialize_sitemap(&entries).unwrap();
        let second = serialize_sitemap(&entries).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sitemap_index() {
        let xml = serialize_sitemap_index(&SitemapIndex {
            root: "https://acme.com/sitemaps".to_string(),
            sitemaps: vec!["static".to_string(), "products.xml".to_string()],
        });

        assert_eq!(
            xml,
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8"?>"#,
                r#"<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
                "<sitemap><loc>https://acme.com/sitemaps/static.xml</loc></sitemap>",
                "<sitemap><loc>https://acme.com/sitemaps/products.xml</loc></sitemap>",
                "</sitemapindex>"
            )
        );
        assert_eq!(xml.matches("<sitemap>").count(), 2);
    }

    #[test]
    fn test_sitemap_index_strips_trailing_slash_and_escapes() {
        let xml = serialize_sitemap_index(&SitemapIndex {
            root: "https://acme.com/a&b/".to_string(),
            sitemaps: vec!["x<y".to_string()],
        });
        assert!(xml.contains("<loc>https://acme.com/a&amp;b/x&lt;y.xml</loc>"));
        read_back(&xml);
    }

    #[test]
    fn test_empty_sitemap_index() {
        let xml = serialize_sitemap_index(&SitemapIndex {
            root: "https://acme.com".to_string(),
            sitemaps: Vec::new(),
        });
        let (root, _) = read_back(&xml);
        assert_eq!(root, "sitemapindex");
        assert!(!xml.contains("<sitemap>"));
    }

    fn text_strategy() -> impl Strategy<Value = String> {
        r#"[a-zA-Z0-9&<>"'/:.?=#-][a-zA-Z0-9 &<>"'/:.?=#-]{0,39}"#
    }

    fn entry_strategy() -> impl Strategy<Value = SitemapEntry> {
        (
            text_strategy(),
            proptest::option::of(0.0f64..=1.0),
            proptest::collection::vec(text_strategy(), 0..3),
            proptest::collection::btree_map("[a-z]{2}(-[A-Z]{2})?", text_strategy(), 0..3),
            proptest::collection::vec((text_strategy(), text_strategy()), 0..2),
        )
            .prop_map(|(url, priority, images, languages, videos)| {
                let mut entry = SitemapEntry::new(url);
                entry.priority = priority;
                entry.images = Some(images);
                entry.alternates = Some(crate::types::Alternates { languages });
                entry.videos = Some(
                    videos
                        .into_iter()
                        .map(|(title, description)| {
                            VideoEntry::new("https://acme.com/t.jpg", title, description)
                        })
                        .collect(),
                );
                entry
            })
    }

    proptest! {
        #[test]
        fn prop_output_is_well_formed(entries in proptest::collection::vec(entry_strategy(), 0..6)) {
            let xml = serialize_sitemap(&entries).unwrap();
            let (root, _) = read_back(&xml);
            prop_assert_eq!(root, "urlset");
        }

        #[test]
        fn prop_namespaces_match_content(entries in proptest::collection::vec(entry_strategy(), 0..6)) {
            let xml = serialize_sitemap(&entries).unwrap();
            let tag = root_tag(&xml);
            let expected = Namespaces::of(&entries);

            prop_assert_eq!(tag.contains("xmlns:image"), entries.iter().any(SitemapEntry::has_images));
            prop_assert_eq!(tag.contains("xmlns:video"), entries.iter().any(SitemapEntry::has_videos));
            prop_assert_eq!(tag.contains("xmlns:xhtml"), entries.iter().any(SitemapEntry::has_alternates));
            prop_assert_eq!(tag.contains("xmlns:image"), expected.image);
        }

        #[test]
        fn prop_escaping_round_trips(text in text_strategy()) {
            let escaped = escape_xml(&text);
            for reserved in ['<', '>', '"', '\''] {
                prop_assert!(!escaped.contains(reserved));
            }
            let decoded = quick_xml::escape::unescape(&escaped).unwrap();
            prop_assert_eq!(decoded.as_ref(), text.as_str());
        }

        #[test]
        fn prop_priority_has_at_most_one_decimal(priority in 0.0f64..=1.0) {
            let formatted = format_priority(priority);
            let decimals = formatted.split('.').nth(1).map_or(0, str::len);
            prop_assert!(decimals <= 1);
            let parsed: f64 = formatted.parse().unwrap();
            prop_assert!((parsed - priority).abs() <= 0.05 + 1e-9);
        }
    }
}

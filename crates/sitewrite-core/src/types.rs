//! Entry model accepted by the serializer.
//!
//! These types carry no logic beyond construction helpers. Every optional
//! field uses `Option` so "omitted" stays distinguishable from "present but
//! empty". Field names on the wire follow the common web-framework sitemap
//! shape (`lastModified`, `changeFrequency`, `alternates.languages`), so
//! entry lists written for those frameworks deserialize unchanged.

use crate::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An ordered list of entries making up one sitemap file.
///
/// Output order is enumeration order; nothing is sorted.
pub type SitemapFile = Vec<SitemapEntry>;

/// A single URL record in a sitemap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    /// Absolute URL of the page. Must not be empty.
    pub url: String,
    /// Last modification time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateField>,
    /// How frequently the page changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_frequency: Option<ChangeFrequency>,
    /// Priority relative to other URLs on the site, conceptually 0.0 to 1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
    /// Localized alternates of this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternates: Option<Alternates>,
    /// Image locations, in output order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// Videos embedded on the page, in output order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<VideoEntry>>,
}

impl SitemapEntry {
    /// Create an entry with only a location.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            last_modified: None,
            change_frequency: None,
            priority: None,
            alternates: None,
            images: None,
            videos: None,
        }
    }

    /// Set the last modification time.
    #[must_use]
    pub fn with_last_modified(mut self, value: impl Into<DateField>) -> Self {
        self.last_modified = Some(value.into());
        self
    }

    /// Set the change frequency.
    #[must_use]
    pub fn with_change_frequency(mut self, frequency: ChangeFrequency) -> Self {
        self.change_frequency = Some(frequency);
        self
    }

    /// Set the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Add a localized alternate (`hreflang` → `href`).
    #[must_use]
    pub fn with_alternate(mut self, language: impl Into<String>, url: impl Into<String>) -> Self {
        self.alternates
            .get_or_insert_with(Alternates::default)
            .languages
            .insert(language.into(), url.into());
        self
    }

    /// Append an image location.
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.get_or_insert_with(Vec::new).push(url.into());
        self
    }

    /// Append a video.
    #[must_use]
    pub fn with_video(mut self, video: VideoEntry) -> Self {
        self.videos.get_or_insert_with(Vec::new).push(video);
        self
    }

    pub(crate) fn has_images(&self) -> bool {
        self.images.as_ref().is_some_and(|images| !images.is_empty())
    }

    pub(crate) fn has_videos(&self) -> bool {
        self.videos.as_ref().is_some_and(|videos| !videos.is_empty())
    }

    pub(crate) fn has_alternates(&self) -> bool {
        self.alternates
            .as_ref()
            .is_some_and(|alternates| !alternates.languages.is_empty())
    }
}

/// A date value that is either a real timestamp or caller-formatted text.
///
/// Text is passed through verbatim; timestamps render as ISO-8601 UTC with
/// millisecond precision (`2024-01-15T10:30:00.000Z`). When deserializing,
/// strings always become [`DateField::Text`] so they are never reformatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateField {
    /// Preformatted date string.
    Text(String),
    /// A UTC timestamp.
    DateTime(DateTime<Utc>),
}

impl DateField {
    /// Render the value as it appears in the document (before escaping).
    #[must_use]
    pub fn to_iso_string(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::DateTime(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl From<DateTime<Utc>> for DateField {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }
}

impl From<String> for DateField {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for DateField {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Change frequency hints.
///
/// These values indicate how frequently a page is likely to change,
/// though search engines may not follow these hints strictly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    /// The page changes every time it is accessed.
    Always,
    /// The page changes hourly.
    Hourly,
    /// The page changes daily.
    Daily,
    /// The page changes weekly.
    Weekly,
    /// The page changes monthly.
    Monthly,
    /// The page changes yearly.
    Yearly,
    /// The page is archived and will not change.
    Never,
}

impl ChangeFrequency {
    /// The lowercase protocol name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChangeFrequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            "never" => Ok(Self::Never),
            _ => Err(Error::Serialization(format!(
                "Invalid changeFrequency value: {s}"
            ))),
        }
    }
}

/// Localized alternates for an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternates {
    /// Language code → URL. Emitted as one `xhtml:link` per pair.
    pub languages: BTreeMap<String, String>,
}

/// A video embedded on a page (Google video sitemap extension).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoEntry {
    /// Thumbnail image URL. Required.
    pub thumbnail_loc: String,
    /// Video title. Required.
    pub title: String,
    /// Video description. Required.
    pub description: String,
    /// URL of the raw media file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_loc: Option<String>,
    /// URL of the embeddable player.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_loc: Option<String>,
    /// Duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Number of views.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    /// Free-form tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Rating, conventionally 0.0 to 5.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// Date after which the video is no longer available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateField>,
    /// Date the video was first published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<DateField>,
    /// Whether the video is suitable for all audiences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_friendly: Option<FamilyFriendly>,
}

impl VideoEntry {
    /// Create a video with its three required fields.
    #[must_use]
    pub fn new(
        thumbnail_loc: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            thumbnail_loc: thumbnail_loc.into(),
            title: title.into(),
            description: description.into(),
            content_loc: None,
            player_loc: None,
            duration: None,
            view_count: None,
            tag: None,
            rating: None,
            expiration_date: None,
            publication_date: None,
            family_friendly: None,
        }
    }
}

/// Family-friendly flag, given either as a boolean or as literal text.
///
/// `Flag(true)` renders as `yes` and `Flag(false)` as `no`, the values the
/// video extension expects; `Text` is rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FamilyFriendly {
    /// Boolean form.
    Flag(bool),
    /// Literal text form.
    Text(String),
}

impl fmt::Display for FamilyFriendly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(true) => f.write_str("yes"),
            Self::Flag(false) => f.write_str("no"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Input to [`crate::serialize_sitemap_index`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapIndex {
    /// Base URL the sitemap files are served under.
    pub root: String,
    /// Sitemap names, with or without the `.xml` suffix.
    pub sitemaps: Vec<String>,
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::PageId;

/// Kind of media behind a creative.
///
/// Parsed case-insensitively; a missing or blank value means [`MediaType::Image`].
/// Unknown kinds are kept (lower-cased) instead of being guessed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaType {
    #[default]
    Image,
    Video,
    Other(String),
}

impl MediaType {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()) {
            None => Self::Image,
            Some(s) if s.is_empty() || s == "image" => Self::Image,
            Some(s) if s == "video" => Self::Video,
            Some(s) => Self::Other(s),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Other(s) => s,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, Self::Video)
    }
}

impl From<String> for MediaType {
    fn from(s: String) -> Self {
        Self::from_raw(Some(&s))
    }
}

impl From<MediaType> for String {
    fn from(media_type: MediaType) -> Self {
        media_type.as_str().to_string()
    }
}

/// The single highest-ranked creative of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopCreative {
    pub media_url: Option<String>,
    pub media_type: MediaType,
    /// Public snapshot of the ad that produced the creative. Without it the card
    /// still shows the media but is not clickable.
    pub snapshot_url: Option<String>,
}

/// One advertiser page, normalized from a joined storage row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSummary {
    pub page_id: PageId,
    pub name: String,
    pub country: Option<String>,
    pub total_eu_reach: u64,
    /// `None` when no ad matched; distinct from an empty string. The "Unknown"
    /// placeholder is a display concern.
    pub beneficiary: Option<String>,
    pub top_creative: Option<TopCreative>,
    /// Row columns that normalization does not touch, passed through unchanged.
    #[serde(flatten)]
    pub passthrough: Map<String, Value>,
}

impl PageSummary {
    /// Minimal summary without joined data, mostly useful for fixtures.
    pub fn new(page_id: impl Into<PageId>, name: impl Into<String>, total_eu_reach: u64) -> Self {
        Self {
            page_id: page_id.into(),
            name: name.into(),
            country: None,
            total_eu_reach,
            beneficiary: None,
            top_creative: None,
            passthrough: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_is_case_insensitive_and_defaults_to_image() {
        assert_eq!(MediaType::from_raw(Some("VIDEO")), MediaType::Video);
        assert_eq!(MediaType::from_raw(Some("Image")), MediaType::Image);
        assert_eq!(MediaType::from_raw(None), MediaType::Image);
        assert_eq!(MediaType::from_raw(Some("")), MediaType::Image);
        assert_eq!(MediaType::from_raw(Some("  ")), MediaType::Image);
        assert_eq!(
            MediaType::from_raw(Some("Carousel")),
            MediaType::Other("carousel".to_string())
        );
    }

    #[test]
    fn summary_serializes_media_type_lowercase_and_flattens_passthrough() {
        let mut summary = PageSummary::new("p1", "Page", 10);
        summary.top_creative = Some(TopCreative {
            media_url: Some("x".to_string()),
            media_type: MediaType::Video,
            snapshot_url: None,
        });
        summary
            .passthrough
            .insert("created_at".to_string(), Value::from("2025-01-01"));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["top_creative"]["media_type"], "video");
        assert_eq!(json["created_at"], "2025-01-01");
        assert_eq!(json["beneficiary"], Value::Null);
    }
}

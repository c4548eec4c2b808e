use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::Nested;

/// Raw `pages` row with its embedded relations.
#[derive(Debug, Clone, Deserialize)]
pub struct PageRow {
    #[serde(deserialize_with = "id_as_string")]
    pub page_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub total_eu_reach: Option<u64>,
    #[serde(default)]
    pub page_top_creatives: Option<Nested<CreativeRow>>,
    #[serde(default)]
    pub ads: Option<Nested<AdRow>>,
    /// Every other column of the row.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// `page_top_creatives` embed.
#[derive(Debug, Clone, Deserialize)]
pub struct CreativeRow {
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    /// The ad that produced the creative.
    #[serde(default)]
    pub ads: Option<Nested<SnapshotAdRow>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotAdRow {
    #[serde(default)]
    pub ad_snapshot_url: Option<String>,
}

/// `ads` embed used for the beneficiary.
#[derive(Debug, Clone, Deserialize)]
pub struct AdRow {
    #[serde(default)]
    pub beneficiary: Option<String>,
}

/// `page_id` is text in the schema but older rows were written as numbers.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

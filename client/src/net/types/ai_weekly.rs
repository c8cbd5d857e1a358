//! AI news digest reports.

use serde::{Deserialize, Serialize};

use super::de;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiReportItem {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiReport {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    /// ISO week label, e.g. `2026-W41`.
    #[serde(default)]
    pub week: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, alias = "content")]
    pub content_md: String,
    #[serde(default)]
    pub items: Vec<AiReportItem>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateReportRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week: Option<String>,
}

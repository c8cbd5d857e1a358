//! Doc-service pages.

use serde::{Deserialize, Serialize};

use super::de;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocPage {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub title: String,
    #[serde(default, alias = "content")]
    pub content_md: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocPageInput {
    pub title: String,
    pub content_md: String,
    pub tags: Vec<String>,
}

//! File gateway listing entries.

use serde::{Deserialize, Serialize};

use super::de;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    #[serde(alias = "name", alias = "path")]
    pub key: String,
    #[serde(default, deserialize_with = "de::int")]
    pub size: i64,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "de::flag")]
    pub is_dir: bool,
}

impl FileEntry {
    /// Last path segment.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.key.trim_end_matches('/').rsplit('/').next().unwrap_or(&self.key)
    }
}

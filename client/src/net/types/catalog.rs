//! Service catalog entries from the config service.

use serde::{Deserialize, Serialize};

use super::de;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default, deserialize_with = "de::opt_id")]
    pub port: Option<String>,
    #[serde(default)]
    pub health_path: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "dependencies")]
    pub depends_on: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Health probe result for one catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub name: String,
    #[serde(deserialize_with = "de::flag")]
    pub healthy: bool,
    #[serde(default, deserialize_with = "de::int")]
    pub latency_ms: i64,
    #[serde(default)]
    pub message: Option<String>,
}

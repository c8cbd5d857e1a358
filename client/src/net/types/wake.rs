//! Remote-wake devices.

use serde::{Deserialize, Serialize};

use super::de;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WakeDevice {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub name: String,
    pub mac: String,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub online: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WakeResult {
    #[serde(default)]
    pub sent: bool,
    #[serde(default)]
    pub message: Option<String>,
}

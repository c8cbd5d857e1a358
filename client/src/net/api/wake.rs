//! Remote wake devices.

use crate::net::client::{ApiClient, segment};
use crate::net::error::ApiError;
use crate::net::services::ServiceId;
use crate::net::types::wake::{WakeDevice, WakeResult};

pub async fn list_devices(client: &ApiClient) -> Result<Vec<WakeDevice>, ApiError> {
    client.get_list(ServiceId::RemoteWake, "/devices").await
}

/// Send a wake packet to one device.
pub async fn wake(client: &ApiClient, id: &str) -> Result<WakeResult, ApiError> {
    client
        .post(ServiceId::RemoteWake, &format!("/devices/{}/wake", segment(id)), &serde_json::json!({}))
        .await
}

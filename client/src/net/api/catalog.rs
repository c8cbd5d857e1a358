//! Service catalog held by the config service.

use crate::net::client::{ApiClient, segment};
use crate::net::error::ApiError;
use crate::net::services::ServiceId;
use crate::net::types::catalog::{ServiceHealth, ServiceInfo};

pub async fn list_services(client: &ApiClient) -> Result<Vec<ServiceInfo>, ApiError> {
    client.get_list(ServiceId::Config, "/services").await
}

pub async fn service_health(client: &ApiClient, name: &str) -> Result<ServiceHealth, ApiError> {
    client.get(ServiceId::Config, &format!("/services/{}/health", segment(name))).await
}

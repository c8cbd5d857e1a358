//! Doc-service pages.

use crate::net::client::{ApiClient, segment};
use crate::net::error::ApiError;
use crate::net::services::ServiceId;
use crate::net::types::docs::{DocPage, DocPageInput};

pub async fn list_pages(client: &ApiClient) -> Result<Vec<DocPage>, ApiError> {
    client.get_list(ServiceId::DocService, "/pages").await
}

pub async fn get_page(client: &ApiClient, id: &str) -> Result<DocPage, ApiError> {
    client.get(ServiceId::DocService, &format!("/pages/{}", segment(id))).await
}

pub async fn create_page(client: &ApiClient, input: &DocPageInput) -> Result<DocPage, ApiError> {
    client.post(ServiceId::DocService, "/pages", input).await
}

pub async fn update_page(client: &ApiClient, id: &str, input: &DocPageInput) -> Result<DocPage, ApiError> {
    client.put(ServiceId::DocService, &format!("/pages/{}", segment(id)), input).await
}

pub async fn delete_page(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(ServiceId::DocService, &format!("/pages/{}", segment(id))).await
}

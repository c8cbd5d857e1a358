//! File gateway listing, upload and delete.

use crate::net::client::{ApiClient, segment, with_query};
use crate::net::error::ApiError;
use crate::net::http::FormPart;
use crate::net::services::ServiceId;
use crate::net::types::files::FileEntry;

pub async fn list(client: &ApiClient, prefix: &str) -> Result<Vec<FileEntry>, ApiError> {
    client.get_list(ServiceId::FileGateway, &with_query("/files", &[("prefix", prefix)])).await
}

/// Upload a file under `prefix`.
pub async fn upload(
    client: &ApiClient,
    prefix: &str,
    file_name: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<FileEntry, ApiError> {
    let parts = vec![
        FormPart::text("prefix", prefix),
        FormPart::file("file", file_name, content_type, bytes),
    ];
    client.upload(ServiceId::FileGateway, "/files", parts).await
}

pub async fn delete(client: &ApiClient, key: &str) -> Result<(), ApiError> {
    client.delete(ServiceId::FileGateway, &format!("/files/{}", segment(key))).await
}

/// Direct download link for `key`.
#[must_use]
pub fn download_url(client: &ApiClient, key: &str) -> String {
    client.url(ServiceId::FileGateway, &format!("/files/{}/download", segment(key)))
}

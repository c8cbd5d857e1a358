//! Homework generation and photo grading.

use crate::net::client::{ApiClient, segment};
use crate::net::error::ApiError;
use crate::net::http::FormPart;
use crate::net::services::ServiceId;
use crate::net::types::homework::{
    ConfirmRequest, GenerateHomeworkRequest, HomeworkRecord, Submission, UploadReceipt,
};

pub async fn generate(client: &ApiClient, request: &GenerateHomeworkRequest) -> Result<HomeworkRecord, ApiError> {
    client.post(ServiceId::Homework, "/homework/generate", request).await
}

pub async fn list_records(client: &ApiClient) -> Result<Vec<HomeworkRecord>, ApiError> {
    client.get_list(ServiceId::Homework, "/homework/records").await
}

pub async fn get_record(client: &ApiClient, id: &str) -> Result<HomeworkRecord, ApiError> {
    client.get(ServiceId::Homework, &format!("/homework/records/{}", segment(id))).await
}

pub async fn delete_record(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(ServiceId::Homework, &format!("/homework/records/{}", segment(id))).await
}

/// Upload one page photo for grading.
pub async fn upload_submission(
    client: &ApiClient,
    file_name: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<UploadReceipt, ApiError> {
    let parts = vec![FormPart::file("file", file_name, content_type, bytes)];
    client.upload(ServiceId::Homework, "/grading/submissions", parts).await
}

pub async fn get_submission(client: &ApiClient, id: &str) -> Result<Submission, ApiError> {
    client.get(ServiceId::Homework, &format!("/grading/submissions/{}", segment(id))).await
}

/// Submit the reviewed verdicts; returns the confirmed submission.
pub async fn confirm_submission(
    client: &ApiClient,
    id: &str,
    body: &ConfirmRequest,
) -> Result<Submission, ApiError> {
    client
        .post(ServiceId::Homework, &format!("/grading/submissions/{}/confirm", segment(id)), body)
        .await
}

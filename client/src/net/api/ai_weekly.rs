//! AI weekly digest reports.

use crate::net::client::{ApiClient, segment};
use crate::net::error::ApiError;
use crate::net::services::ServiceId;
use crate::net::types::ai_weekly::{AiReport, GenerateReportRequest};

pub async fn list_reports(client: &ApiClient) -> Result<Vec<AiReport>, ApiError> {
    client.get_list(ServiceId::AiWeekly, "/reports").await
}

pub async fn get_report(client: &ApiClient, id: &str) -> Result<AiReport, ApiError> {
    client.get(ServiceId::AiWeekly, &format!("/reports/{}", segment(id))).await
}

pub async fn generate_report(client: &ApiClient, week: Option<String>) -> Result<AiReport, ApiError> {
    client.post(ServiceId::AiWeekly, "/reports/generate", &GenerateReportRequest { week }).await
}

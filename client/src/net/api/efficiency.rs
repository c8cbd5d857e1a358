//! Efficiency evaluator.

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::services::ServiceId;
use crate::net::types::efficiency::{EfficiencyEvaluation, EvaluationRequest};

pub async fn evaluate(client: &ApiClient, request: &EvaluationRequest) -> Result<EfficiencyEvaluation, ApiError> {
    client.post(ServiceId::Efficiency, "/evaluations", request).await
}

pub async fn history(client: &ApiClient) -> Result<Vec<EfficiencyEvaluation>, ApiError> {
    client.get_list(ServiceId::Efficiency, "/evaluations").await
}

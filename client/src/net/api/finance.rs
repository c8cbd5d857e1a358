//! Finance transactions and monthly summaries.

use crate::net::client::{ApiClient, segment, with_query};
use crate::net::error::ApiError;
use crate::net::services::ServiceId;
use crate::net::types::finance::{MonthlySummary, Transaction, TransactionInput, summarize};

pub async fn list_transactions(client: &ApiClient, month: &str) -> Result<Vec<Transaction>, ApiError> {
    client.get_list(ServiceId::Finance, &with_query("/transactions", &[("month", month)])).await
}

pub async fn create_transaction(client: &ApiClient, input: &TransactionInput) -> Result<Transaction, ApiError> {
    client.post(ServiceId::Finance, "/transactions", input).await
}

pub async fn delete_transaction(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(ServiceId::Finance, &format!("/transactions/{}", segment(id))).await
}

/// Monthly summary from the service, or computed from the month's
/// transactions when the service has no summary endpoint (404).
pub async fn monthly_summary(client: &ApiClient, month: &str) -> Result<MonthlySummary, ApiError> {
    match client.get(ServiceId::Finance, &with_query("/summary", &[("month", month)])).await {
        Err(e) if e.is_not_found() => {
            let transactions = list_transactions(client, month).await?;
            Ok(summarize(month, &transactions))
        }
        other => other,
    }
}

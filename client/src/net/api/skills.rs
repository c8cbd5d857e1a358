//! Skill catalog.

use crate::net::client::{ApiClient, segment};
use crate::net::error::ApiError;
use crate::net::services::ServiceId;
use crate::net::types::skills::Skill;

pub async fn list_skills(client: &ApiClient) -> Result<Vec<Skill>, ApiError> {
    client.get_list(ServiceId::Skills, "/skills").await
}

pub async fn get_skill(client: &ApiClient, id: &str) -> Result<Skill, ApiError> {
    client.get(ServiceId::Skills, &format!("/skills/{}", segment(id))).await
}

//! Efficiency evaluator records.

use serde::{Deserialize, Serialize};

use super::de;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub task: String,
    pub minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyEvaluation {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub task: String,
    #[serde(default, deserialize_with = "de::int")]
    pub minutes: i64,
    #[serde(deserialize_with = "de::float")]
    pub score: f64,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

//! Homework generation and grading records.

use serde::{Deserialize, Serialize};

use super::de;

/// A generated worksheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HomeworkRecord {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub subject: String,
    pub grade: String,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "de::int")]
    pub problem_count: i64,
    #[serde(default)]
    pub content_md: String,
    #[serde(default)]
    pub answer_md: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateHomeworkRequest {
    pub subject: String,
    pub grade: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub problem_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

/// Server-side grading status of an uploaded submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Processing,
    Graded,
    Confirmed,
    Failed,
}

/// Grader verdict for one problem on a submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProblemResult {
    #[serde(deserialize_with = "de::int")]
    pub index: i64,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub student_answer: Option<String>,
    #[serde(default)]
    pub expected_answer: Option<String>,
    #[serde(deserialize_with = "de::flag")]
    pub correct: bool,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(default)]
    pub status: SubmissionStatus,
    #[serde(default)]
    pub results: Vec<ProblemResult>,
    /// Milliseconds since the Unix epoch when grading finished.
    #[serde(default, deserialize_with = "de::int")]
    pub graded_at: i64,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response to an image upload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(alias = "id", deserialize_with = "de::id")]
    pub submission_id: String,
}

/// One row of the confirmation body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedVerdict {
    pub index: i64,
    pub correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmRequest {
    pub results: Vec<ConfirmedVerdict>,
}

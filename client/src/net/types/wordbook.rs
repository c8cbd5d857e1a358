//! Wordbook service wire types. Replies are free text; see
//! `util::wordbook_parse` for their interpretation.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(alias = "text", alias = "content", alias = "message")]
    pub reply: String,
}

/// A vocabulary card as shown during review.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCard {
    pub word: String,
    pub phonetic: Option<String>,
    pub meaning: String,
    pub example: Option<String>,
    pub review_count: Option<u32>,
    pub next_review: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordbookStats {
    pub total: u32,
    pub due_today: u32,
    pub learned: u32,
    pub streak_days: Option<u32>,
}

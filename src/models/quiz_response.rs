// src/models/quiz_response.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A graded submission, stored in the `user_responses` table.
/// Written once and never read back by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub response_id: String,
    pub user_id: String,
    pub quiz_id: String,
    pub topic: String,

    /// The submitted answers exactly as received.
    #[schema(value_type = Object)]
    pub responses: Map<String, Value>,

    /// Percentage of correct answers (unrounded).
    pub score: f64,
    pub correct: i64,
    pub total: i64,
    pub submitted_at: DateTime<Utc>,
}

/// DTO for submitting answers to a quiz.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponseRequest {
    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub quiz_id: String,

    #[serde(default)]
    pub topic: String,

    /// Question ID -> selected option index. Values of any type are accepted;
    /// anything that is not an integer counts as a wrong answer.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub responses: Map<String, Value>,
}

/// Result returned to the client after grading.
///
/// Note that `score` holds the number of correct answers, while the
/// percentage lives in `percentage`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    pub score: i64,
    pub total: i64,
    pub percentage: f64,
    pub response_id: String,
    pub correct: i64,
    pub incorrect: i64,
    pub topic: String,
}

// src/models/question.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single multiple-choice question, embedded in a quiz.
/// Never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Identifier unique within the owning quiz ("1", "2", ...).
    pub question_id: String,

    /// The text shown to the user.
    pub question: String,

    /// Always four options.
    pub options: Vec<String>,

    /// Index into `options` of the right answer (0-3).
    pub correct_answer: i64,
}

// src/models/quiz.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::models::question::Question;

/// Stored quiz entity, keyed by `(quiz_id, topic)`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub quiz_id: String,

    /// Second half of the key. Lookups must use the exact topic the quiz was created with.
    pub topic: String,

    pub user_id: String,

    pub questions: Vec<Question>,

    /// Requested question count, which may exceed `questions.len()` for cataloged topics.
    pub total_questions: i64,

    pub difficulty: String,

    pub created_at: DateTime<Utc>,

    /// Always "active".
    pub status: String,
}

/// DTO for creating a quiz. Every field is optional.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizRequest {
    #[serde(default)]
    pub topic: String,

    /// Integer, numeric string, float (truncated) or boolean. Defaults to 5 when
    /// missing; an explicit `null` is kept and fails coercion.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i64>)]
    pub num_questions: Option<Value>,

    #[serde(default)]
    pub difficulty: Option<String>,

    #[serde(default)]
    pub user_id: Option<String>,
}

/// Marks a field as present even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_count_differs_from_null_count() {
        let missing: CreateQuizRequest = serde_json::from_str(r#"{"topic": "react"}"#).unwrap();
        let null: CreateQuizRequest =
            serde_json::from_str(r#"{"topic": "react", "numQuestions": null}"#).unwrap();

        assert!(missing.num_questions.is_none());
        assert_eq!(null.num_questions, Some(Value::Null));
    }
}

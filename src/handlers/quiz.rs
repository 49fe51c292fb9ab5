// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    catalog::{catalog_topics, is_cataloged, produce_questions},
    config::{DEFAULT_DIFFICULTY, DEFAULT_QUESTION_COUNT, DEFAULT_USER_ID, QUIZ_STATUS_ACTIVE},
    error::AppError,
    models::{
        question::Question,
        quiz::{CreateQuizRequest, Quiz},
        quiz_response::{QuizResponse, ScoreSummary, SubmitResponseRequest},
    },
    store::QuizStore,
    utils::{coerce::coerce_int, json_body::JsonBody},
};

/// Outcome of grading one submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grade {
    pub correct: i64,
    pub total: i64,
    /// Percentage of correct answers, unrounded.
    pub score: f64,
}

/// Grades submitted answers against a quiz's questions.
///
/// `total` is the number of questions in the quiz, so missing answers count as
/// wrong. Answers that cannot be read as an integer are wrong too; they never
/// fail the whole submission.
pub fn grade_responses(questions: &[Question], responses: &Map<String, Value>) -> Grade {
    let total = questions.len() as i64;

    let correct = questions
        .iter()
        .filter(|q| {
            responses
                .get(&q.question_id)
                .and_then(|answer| coerce_int(answer).ok())
                .is_some_and(|answer| answer == q.correct_answer)
        })
        .count() as i64;

    let score = if total > 0 {
        (correct as f64 / total as f64) * 100.0
    } else {
        0.0
    };

    Grade {
        correct,
        total,
        score,
    }
}

/// Two-decimal rounding with exact halves going to the even digit (3.125 -> 3.12).
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Creates a quiz for a topic and stores it.
///
/// * Cataloged topics (javascript, react, python) use hand-written questions.
/// * Any other topic gets generated placeholder questions.
/// * Every call creates a new quiz with a fresh id.
#[utoipa::path(
    post,
    path = "/api/quiz/generate",
    tag = "Quiz",
    request_body = CreateQuizRequest,
    responses(
        (status = 200, description = "Quiz created", body = Quiz),
        (status = 500, description = "Malformed request or storage failure")
    )
)]
pub async fn create_quiz(
    State(store): State<Arc<dyn QuizStore>>,
    JsonBody(req): JsonBody<CreateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let num_questions = match &req.num_questions {
        Some(value) => coerce_int(value)?,
        None => DEFAULT_QUESTION_COUNT,
    };

    let questions = produce_questions(&req.topic, num_questions);

    let quiz = Quiz {
        quiz_id: Uuid::new_v4().to_string(),
        topic: req.topic,
        user_id: req.user_id.unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
        questions,
        total_questions: num_questions,
        difficulty: req
            .difficulty
            .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string()),
        created_at: Utc::now(),
        status: QUIZ_STATUS_ACTIVE.to_string(),
    };

    store.put_quiz(&quiz).await?;

    tracing::info!(
        quiz_id = %quiz.quiz_id,
        topic = %quiz.topic,
        cataloged = is_cataloged(&quiz.topic),
        questions = quiz.questions.len(),
        "Quiz created"
    );

    Ok(Json(quiz))
}

/// Grades a user's answers against a stored quiz and records the result.
///
/// The quiz is looked up by the exact `(quizId, topic)` pair. Resubmitting
/// creates another response; nothing is deduplicated.
#[utoipa::path(
    post,
    path = "/api/quiz/submit",
    tag = "Quiz",
    request_body = SubmitResponseRequest,
    responses(
        (status = 200, description = "Submission graded", body = ScoreSummary),
        (status = 404, description = "Quiz not found"),
        (status = 500, description = "Malformed request or storage failure")
    )
)]
pub async fn submit_quiz_response(
    State(store): State<Arc<dyn QuizStore>>,
    JsonBody(req): JsonBody<SubmitResponseRequest>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = store
        .get_quiz(&req.quiz_id, &req.topic)
        .await?
        .ok_or_else(|| {
            tracing::warn!(quiz_id = %req.quiz_id, topic = %req.topic, "Quiz not found");
            AppError::NotFound("Quiz not found".to_string())
        })?;

    let grade = grade_responses(&quiz.questions, &req.responses);

    let response = QuizResponse {
        response_id: Uuid::new_v4().to_string(),
        user_id: req.user_id.unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
        quiz_id: req.quiz_id,
        topic: req.topic,
        responses: req.responses,
        score: grade.score,
        correct: grade.correct,
        total: grade.total,
        submitted_at: Utc::now(),
    };

    store.put_response(&response).await?;

    tracing::info!(
        response_id = %response.response_id,
        quiz_id = %response.quiz_id,
        correct = grade.correct,
        total = grade.total,
        "Quiz response recorded"
    );

    Ok(Json(ScoreSummary {
        score: grade.correct,
        total: grade.total,
        percentage: round_to_cents(grade.score),
        response_id: response.response_id,
        correct: grade.correct,
        incorrect: grade.total - grade.correct,
        topic: response.topic,
    }))
}

/// Lists the topics that have hand-written questions.
#[utoipa::path(
    get,
    path = "/api/quiz/topics",
    tag = "Quiz",
    responses(
        (status = 200, description = "Cataloged topic names", body = [String])
    )
)]
pub async fn list_topics() -> impl IntoResponse {
    Json(catalog_topics())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn answers(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn all_correct_scores_one_hundred() {
        let questions = produce_questions("react", 5);
        let submitted = answers(json!({"1": 1, "2": 1, "3": 1, "4": 1, "5": 1}));

        let grade = grade_responses(&questions, &submitted);

        assert_eq!(grade.correct, grade.total);
        assert_eq!(grade.score, 100.0);
    }

    #[test]
    fn mismatched_answer_is_counted_wrong() {
        let questions = produce_questions("javascript", 3);
        let submitted = answers(json!({"1": "0", "2": "9", "3": "2"}));

        let grade = grade_responses(&questions, &submitted);

        assert_eq!(grade.correct, 2);
        assert_eq!(grade.total, 3);
        assert_eq!(round_to_cents(grade.score), 66.67);
    }

    #[test]
    fn malformed_answers_do_not_abort_grading() {
        let questions = produce_questions("javascript", 3);
        let submitted = answers(json!({"1": "abc", "2": null, "3": [2]}));

        let grade = grade_responses(&questions, &submitted);

        assert_eq!(grade.correct, 0);
        assert_eq!(grade.total, 3);
    }

    #[test]
    fn omitted_answers_count_against_total() {
        let questions = produce_questions("python", 5);
        let submitted = answers(json!({"2": 1}));

        let grade = grade_responses(&questions, &submitted);

        assert_eq!(grade.correct, 1);
        assert_eq!(grade.total, 5);
        assert_eq!(grade.score, 20.0);
    }

    #[test]
    fn unknown_question_ids_are_ignored() {
        let questions = produce_questions("python", 2);
        let submitted = answers(json!({"1": 0, "99": 1}));

        let grade = grade_responses(&questions, &submitted);

        assert_eq!(grade.correct, 1);
        assert_eq!(grade.total, 2);
    }

    #[test]
    fn empty_quiz_scores_zero() {
        let grade = grade_responses(&[], &answers(json!({"1": 0})));

        assert_eq!(grade.total, 0);
        assert_eq!(grade.score, 0.0);
    }

    #[test]
    fn synthesized_quiz_grades_against_rotating_answers() {
        let questions = produce_questions("chemistry", 5);
        let submitted = answers(json!({"1": 0, "2": 1, "3": 2, "4": 3, "5": 1}));

        let grade = grade_responses(&questions, &submitted);

        assert_eq!(grade.correct, 4);
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_to_cents(100.0 / 3.0), 33.33);
        assert_eq!(round_to_cents(200.0 / 3.0), 66.67);
        assert_eq!(round_to_cents(0.0), 0.0);
    }

    #[test]
    fn exact_halves_round_to_even() {
        assert_eq!(round_to_cents(3.125), 3.12);
        assert_eq!(round_to_cents(9.375), 9.38);
        assert_eq!(round_to_cents(15.625), 15.62);
    }

    #[test]
    fn one_of_thirty_two_rounds_down() {
        let questions = produce_questions("geo", 32);
        let grade = grade_responses(&questions, &answers(json!({"1": 0})));

        assert_eq!(grade.correct, 1);
        assert_eq!(round_to_cents(grade.score), 3.12);
    }
}

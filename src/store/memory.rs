// src/store/memory.rs

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    models::{quiz::Quiz, quiz_response::QuizResponse},
    store::QuizStore,
};

/// In-process store used when no database is configured, and by the tests.
#[derive(Default)]
pub struct MemoryStore {
    quizzes: RwLock<HashMap<(String, String), Quiz>>,
    responses: RwLock<HashMap<String, QuizResponse>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn quiz_count(&self) -> usize {
        self.quizzes.read().await.len()
    }

    pub async fn response_count(&self) -> usize {
        self.responses.read().await.len()
    }

    /// All responses recorded against a quiz, in no particular order.
    pub async fn responses_for_quiz(&self, quiz_id: &str) -> Vec<QuizResponse> {
        self.responses
            .read()
            .await
            .values()
            .filter(|r| r.quiz_id == quiz_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl QuizStore for MemoryStore {
    async fn put_quiz(&self, quiz: &Quiz) -> Result<(), AppError> {
        self.quizzes
            .write()
            .await
            .insert((quiz.quiz_id.clone(), quiz.topic.clone()), quiz.clone());
        Ok(())
    }

    async fn get_quiz(&self, quiz_id: &str, topic: &str) -> Result<Option<Quiz>, AppError> {
        Ok(self
            .quizzes
            .read()
            .await
            .get(&(quiz_id.to_string(), topic.to_string()))
            .cloned())
    }

    async fn put_response(&self, response: &QuizResponse) -> Result<(), AppError> {
        self.responses
            .write()
            .await
            .insert(response.response_id.clone(), response.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::produce_questions;
    use chrono::Utc;

    fn sample_quiz(quiz_id: &str, topic: &str) -> Quiz {
        Quiz {
            quiz_id: quiz_id.to_string(),
            topic: topic.to_string(),
            user_id: "tester".to_string(),
            questions: produce_questions(topic, 2),
            total_questions: 2,
            difficulty: "easy".to_string(),
            created_at: Utc::now(),
            status: "active".to_string(),
        }
    }

    #[tokio::test]
    async fn quiz_lookup_requires_exact_topic() {
        let store = MemoryStore::new();
        store.put_quiz(&sample_quiz("q1", "Python")).await.unwrap();

        assert!(store.get_quiz("q1", "Python").await.unwrap().is_some());
        assert!(store.get_quiz("q1", "python").await.unwrap().is_none());
        assert!(store.get_quiz("q2", "Python").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn same_id_different_topic_are_separate_entries() {
        let store = MemoryStore::new();
        store.put_quiz(&sample_quiz("q1", "react")).await.unwrap();
        store.put_quiz(&sample_quiz("q1", "python")).await.unwrap();

        assert_eq!(store.quiz_count().await, 2);
        let react = store.get_quiz("q1", "react").await.unwrap().unwrap();
        assert_eq!(react.questions[0].question, "What is React?");
    }

    #[tokio::test]
    async fn responses_are_filtered_by_quiz() {
        let store = MemoryStore::new();
        for (response_id, quiz_id) in [("r1", "q1"), ("r2", "q1"), ("r3", "q2")] {
            let response = QuizResponse {
                response_id: response_id.to_string(),
                user_id: "tester".to_string(),
                quiz_id: quiz_id.to_string(),
                topic: "react".to_string(),
                responses: serde_json::Map::new(),
                score: 0.0,
                correct: 0,
                total: 0,
                submitted_at: Utc::now(),
            };
            store.put_response(&response).await.unwrap();
        }

        assert_eq!(store.response_count().await, 3);
        assert_eq!(store.responses_for_quiz("q1").await.len(), 2);
    }
}

// src/store/mod.rs

//! Persistence for quizzes and graded responses.
//!
//! Handlers only ever see `dyn QuizStore`, so the Postgres store and the in-memory
//! store are interchangeable.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{quiz::Quiz, quiz_response::QuizResponse},
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Key-value access to the two tables the service needs.
///
/// Every write stores a whole entity and every read returns a whole entity.
#[async_trait]
pub trait QuizStore: Send + Sync {
    /// Stores a quiz under `(quiz_id, topic)`, replacing any previous entry.
    async fn put_quiz(&self, quiz: &Quiz) -> Result<(), AppError>;

    /// Fetches a quiz by its exact `(quiz_id, topic)` key.
    async fn get_quiz(&self, quiz_id: &str, topic: &str) -> Result<Option<Quiz>, AppError>;

    /// Stores a graded response under its `response_id`.
    async fn put_response(&self, response: &QuizResponse) -> Result<(), AppError>;

    /// Cheap round trip used by the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}

// src/store/postgres.rs

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions, types::Json};

use crate::{
    error::AppError,
    models::{quiz::Quiz, quiz_response::QuizResponse},
    store::QuizStore,
};

const CONNECT_ATTEMPTS: u32 = 5;

/// Postgres-backed store. Entities are kept whole in JSONB columns, next to the
/// key columns used for lookups.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects with a bounded retry loop, then applies the embedded migrations.
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let mut retry_count = 0;
        let pool = loop {
            match PgPoolOptions::new()
                .max_connections(5)
                .acquire_timeout(Duration::from_secs(3))
                .connect(database_url)
                .await
            {
                Ok(pool) => break pool,
                Err(e) => {
                    retry_count += 1;
                    if retry_count >= CONNECT_ATTEMPTS {
                        return Err(AppError::InternalServerError(format!(
                            "Failed to connect to database after {} attempts: {}",
                            CONNECT_ATTEMPTS, e
                        )));
                    }
                    tracing::warn!("Database not ready, retrying in 2s... (Attempt {})", retry_count);
                    tokio::time::sleep(Duration::from_secs(2)).await;
                }
            }
        };

        tracing::info!("Database connected...");

        tracing::info!("Running migrations...");
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Migrations applied successfully.");

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl QuizStore for PgStore {
    async fn put_quiz(&self, quiz: &Quiz) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO quizzes (quiz_id, topic, user_id, body, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (quiz_id, topic) DO UPDATE SET
                user_id = EXCLUDED.user_id,
                body = EXCLUDED.body,
                created_at = EXCLUDED.created_at
            "#,
        )
        .bind(&quiz.quiz_id)
        .bind(&quiz.topic)
        .bind(&quiz.user_id)
        .bind(Json(quiz))
        .bind(quiz.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to store quiz {}: {:?}", quiz.quiz_id, e);
            AppError::from(e)
        })?;

        Ok(())
    }

    async fn get_quiz(&self, quiz_id: &str, topic: &str) -> Result<Option<Quiz>, AppError> {
        let row: Option<(Json<Quiz>,)> = sqlx::query_as(
            r#"
            SELECT body
            FROM quizzes
            WHERE quiz_id = $1 AND topic = $2
            "#,
        )
        .bind(quiz_id)
        .bind(topic)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(Json(quiz),)| quiz))
    }

    async fn put_response(&self, response: &QuizResponse) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO user_responses (response_id, quiz_id, topic, user_id, body, submitted_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (response_id) DO UPDATE SET body = EXCLUDED.body
            "#,
        )
        .bind(&response.response_id)
        .bind(&response.quiz_id)
        .bind(&response.topic)
        .bind(&response.user_id)
        .bind(Json(response))
        .bind(response.submitted_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to store response {}: {:?}", response.response_id, e);
            AppError::from(e)
        })?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

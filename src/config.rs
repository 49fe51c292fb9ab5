// src/config.rs

use std::env;
use dotenvy::dotenv;

/// Question count used when the request omits `numQuestions`.
pub const DEFAULT_QUESTION_COUNT: i64 = 5;

pub const DEFAULT_DIFFICULTY: &str = "medium";

/// Sentinel stored when the caller does not identify itself.
pub const DEFAULT_USER_ID: &str = "unknown";

/// Every quiz is created in this state and never leaves it.
pub const QUIZ_STATUS_ACTIVE: &str = "active";

/// Number of pre-authored questions per cataloged topic.
pub const CATALOG_TOPIC_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. When unset the service runs on the in-memory store.
    pub database_url: Option<String>,
    pub rust_log: String,
    pub port: u16,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let log_dir = env::var("LOG_DIR")
            .unwrap_or_else(|_| "logs".to_string());

        Self {
            database_url,
            rust_log,
            port,
            log_dir,
        }
    }
}

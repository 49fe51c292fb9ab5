// src/handlers/health.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::{config::Config, error::AppError, store::QuizStore};

/// Liveness check that also round-trips the store and reports which backend is in use.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    responses(
        (status = 200, description = "Service and store are reachable"),
        (status = 500, description = "Store is unreachable")
    )
)]
pub async fn health_check(
    State(store): State<Arc<dyn QuizStore>>,
    State(config): State<Config>,
) -> Result<impl IntoResponse, AppError> {
    store.ping().await?;

    let backend = if config.database_url.is_some() {
        "postgres"
    } else {
        "memory"
    };

    Ok(Json(json!({
        "status": "ok",
        "store": backend,
    })))
}

// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handlers::{health, quiz},
    models::{
        question::Question,
        quiz::{CreateQuizRequest, Quiz},
        quiz_response::{QuizResponse, ScoreSummary, SubmitResponseRequest},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        quiz::create_quiz,
        quiz::submit_quiz_response,
        quiz::list_topics,
        health::health_check
    ),
    components(schemas(
        Question,
        Quiz,
        CreateQuizRequest,
        QuizResponse,
        SubmitResponseRequest,
        ScoreSummary
    )),
    tags(
        (name = "Quiz", description = "Quiz creation and scoring"),
        (name = "System", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Assembles the main application router.
///
/// * Quiz routes under `/api/quiz`.
/// * Health check and OpenAPI docs.
/// * Global middleware: Trace and a CORS layer that allows any origin.
///   The allowed methods and headers are also stamped on every non-preflight
///   response, not only on preflights.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::OPTIONS, Method::POST, Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    let quiz_routes = Router::new()
        .route("/generate", post(quiz::create_quiz))
        .route("/submit", post(quiz::submit_quiz_response))
        .route("/topics", get(quiz::list_topics));

    Router::new()
        .nest("/api/quiz", quiz_routes)
        .route("/api/health", get(health::health_check))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("OPTIONS,POST,GET"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .with_state(state)
}

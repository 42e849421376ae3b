use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};

use crate::core::middleware;
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::questions::{routes as questions_routes, QuestionService};
use crate::features::quizzes::{routes as quizzes_routes, QuizService};
use crate::modules::storage::TriviaStore;
use crate::shared::random::RandomSource;

// Simple health check endpoint
async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Build the API router with every feature wired to the given store and
/// random source.
///
/// Cross-cutting layers (CORS, tracing, request ids) are added by the caller.
pub fn api_router(store: Arc<dyn TriviaStore>, random: Arc<dyn RandomSource>) -> Router {
    let category_service = Arc::new(CategoryService::new(Arc::clone(&store)));
    let question_service = Arc::new(QuestionService::new(
        Arc::clone(&store),
        Arc::clone(&random),
    ));
    let quiz_service = Arc::new(QuizService::new(store, random));

    Router::new()
        .merge(categories_routes::routes(category_service))
        .merge(questions_routes::routes(question_service))
        .merge(quizzes_routes::routes(quiz_service))
        .route("/health", get(health_check))
        .method_not_allowed_fallback(middleware::method_not_allowed_fallback)
        .fallback(middleware::not_found_fallback)
}

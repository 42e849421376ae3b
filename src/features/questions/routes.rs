use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::features::questions::handlers;
use crate::features::questions::services::QuestionService;

/// Create routes for the questions feature
pub fn routes(service: Arc<QuestionService>) -> Router {
    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_or_search_questions),
        )
        .route("/questions/{id}", delete(handlers::delete_question))
        .route(
            "/categories/{id}/questions",
            get(handlers::list_questions_by_category),
        )
        .with_state(service)
}

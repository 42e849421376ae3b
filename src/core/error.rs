use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;

#[allow(dead_code)]
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Client-facing message. Details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::Database(_) | AppError::Internal(_) => "internal server error",
            AppError::NotFound(_) => "resource not found",
            AppError::Unprocessable(_) => "unprocessable",
            AppError::BadRequest(_) => "bad request",
            AppError::MethodNotAllowed(_) => "method not allowed",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(ref e) => tracing::error!("Database error: {:?}", e),
            AppError::Internal(ref msg) => tracing::error!("Internal error: {}", msg),
            ref other => tracing::debug!("Request failed: {}", other),
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::new(status.as_u16(), self.public_message()));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

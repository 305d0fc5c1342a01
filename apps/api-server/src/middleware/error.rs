//! Error handling middleware - `{ "message": ... }` responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use journal_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to JSON error responses.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest(message) => ErrorResponse::new(message.as_str()),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<journal_core::DomainError> for AppError {
    fn from(err: journal_core::DomainError) -> Self {
        match err {
            journal_core::DomainError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

impl From<journal_core::RepoError> for AppError {
    fn from(err: journal_core::RepoError) -> Self {
        match err {
            journal_core::RepoError::Connection(msg) => {
                AppError::Internal(format!("Database connection error: {}", msg))
            }
            journal_core::RepoError::Query(msg) => {
                AppError::Internal(format!("Database query error: {}", msg))
            }
            journal_core::RepoError::Constraint(msg) => {
                AppError::Internal(format!("Database constraint violation: {}", msg))
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

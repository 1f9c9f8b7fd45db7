//! Error handling - RFC 7807 problem responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use postboard_core::error::RepoError;
use postboard_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    /// The request body could not be accepted; carries actix's own status.
    Request(actix_web::Error),
    Storage(RepoError),
    Render(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Request(err) => write!(f, "Rejected request: {}", err),
            AppError::Storage(err) => write!(f, "Storage error: {}", err),
            AppError::Render(msg) => write!(f, "Template error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Request(err) => err.as_response_error().status_code(),
            AppError::Storage(_) | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::Request(err) => {
                let status = self.status_code();
                tracing::debug!(status = status.as_u16(), "Rejected request body: {}", err);
                ErrorResponse::new(
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Bad Request"),
                )
                .with_detail(err.to_string())
            }
            AppError::Storage(RepoError::Connection(msg)) => {
                tracing::error!("Database connection error: {}", msg);
                ErrorResponse::internal_error().with_detail("Database unavailable")
            }
            AppError::Storage(RepoError::Query(msg)) => {
                tracing::error!("Database query error: {}", msg);
                ErrorResponse::internal_error().with_detail("Database error")
            }
            AppError::Render(msg) => {
                tracing::error!("Template rendering failed: {}", msg);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        AppError::Storage(err)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

//! Error handling - maps every failure to the public `{message}` contract.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blogcraft_shared::MessageBody;
use std::fmt;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    NotAuthorized,
    BadRequest(String),
    /// Duplicate unique field. The public contract reports this as 400.
    Conflict(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::NotAuthorized => write!(f, "Not authorized"),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::NotAuthorized => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::NotAuthorized => "Not authorized".to_string(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Conflict(msg) => msg.clone(),
            AppError::Internal(detail) => {
                // Log the detail, return the uniform body.
                tracing::error!("Internal error: {}", detail);
                "Server error".to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(MessageBody::new(message))
    }
}

// Conversion from domain errors
impl From<blogcraft_core::error::DomainError> for AppError {
    fn from(err: blogcraft_core::error::DomainError) -> Self {
        match err {
            blogcraft_core::error::DomainError::NotFound { entity, id } => {
                tracing::debug!(%id, "{} not found", entity);
                AppError::NotFound(format!("{} not found", entity))
            }
            blogcraft_core::error::DomainError::NotAuthorized => AppError::NotAuthorized,
            blogcraft_core::error::DomainError::Validation(msg) => AppError::BadRequest(msg),
            blogcraft_core::error::DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<blogcraft_core::error::RepoError> for AppError {
    fn from(err: blogcraft_core::error::RepoError) -> Self {
        match err {
            blogcraft_core::error::RepoError::NotFound => {
                AppError::NotFound("Resource not found".to_string())
            }
            blogcraft_core::error::RepoError::Constraint(msg) => AppError::Conflict(msg),
            blogcraft_core::error::RepoError::Connection(msg)
            | blogcraft_core::error::RepoError::Query(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

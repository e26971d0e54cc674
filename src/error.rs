use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::services::StoreError;

/// Errors surfaced by directory operations
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Malformed or missing input; the caller should correct it and retry
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl DirectoryError {
    pub fn validation(message: impl Into<String>) -> Self {
        DirectoryError::Validation(message.into())
    }

    pub fn profile_not_found(id: &str) -> Self {
        DirectoryError::NotFound(format!("User with ID {} does not exist", id))
    }

    /// Error category reported to callers
    pub fn category(&self) -> &'static str {
        match self {
            DirectoryError::Validation(_) => "Validation error",
            DirectoryError::NotFound(_) => "User not found",
            DirectoryError::Internal(_) | DirectoryError::Store(_) => "Internal server error",
        }
    }

    /// Message that is safe to hand to an external caller
    pub fn public_message(&self) -> String {
        match self {
            DirectoryError::Validation(msg) | DirectoryError::NotFound(msg) => msg.clone(),
            DirectoryError::Internal(_) | DirectoryError::Store(_) => {
                "Something went wrong on our end".to_string()
            }
        }
    }
}

impl ResponseError for DirectoryError {
    fn status_code(&self) -> StatusCode {
        match self {
            DirectoryError::Validation(_) => StatusCode::BAD_REQUEST,
            DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
            DirectoryError::Internal(_) | DirectoryError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.category(), self.public_message()))
    }
}

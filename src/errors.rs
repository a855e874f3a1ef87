use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

/// Failures of a single call to the completion endpoint.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CompletionError {
    #[error("failed to reach completion API: {0}")]
    Transport(String),

    /// `body` is kept for logging and is not part of the display message.
    #[error("completion API returned status {status}")]
    Upstream { status: u16, body: String },

    #[error("failed to parse completion API response: {0}")]
    UpstreamParse(String),

    #[error("no content returned from completion API")]
    EmptyCompletion,
}

impl From<CompletionError> for AppError {
    fn from(err: CompletionError) -> Self {
        AppError::Upstream(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<actix_web::error::JsonPayloadError> for AppError {
    fn from(err: actix_web::error::JsonPayloadError) -> Self {
        AppError::ValidationError(format!("Invalid JSON body: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

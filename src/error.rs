use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Errors a handler can return; each maps to exactly one HTTP response.
#[derive(Debug)]
pub enum AppError {
    /// The remote agent call failed for any reason.
    Agent(anyhow::Error),
    /// A local file the handler depends on could not be read.
    Io(std::io::Error),
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Agent(err) => {
                error!("Agent call failed: {}", err);
                let body = Json(ErrorResponse {
                    detail: err.to_string(),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            // same plain-text 500 the server gives for any unhandled failure
            AppError::Io(err) => {
                error!("File access failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Agent(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

/// Result type for application handlers
pub type AppResult<T> = Result<T, AppError>;

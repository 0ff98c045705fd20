use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error as ThisError;
use tracing::error;

/// A submitted field that failed its format rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum ValidationError {
    #[error("ID must be 12 digits")]
    Id,

    #[error("Name must be letters and spaces only")]
    Name,

    #[error("Section must be alphanumeric")]
    Section,

    #[error("GPA must be between 0 and 4")]
    Gpa,

    #[error("Invalid department")]
    Department,

    #[error("Username and password must not be empty")]
    EmptyCredentials,
}

/// Failure reading or writing one of the JSON backing files.
#[derive(Debug, ThisError)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path} is not valid: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, ThisError)]
pub enum RosterError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Student {0} already exists")]
    DuplicateId(String),

    #[error("Student {0} not found")]
    NotFound(String),

    #[error("Username {0} already exists")]
    AlreadyExists(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Login required")]
    Unauthorized,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Background task failed: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),
}

impl IntoResponse for RosterError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            RosterError::Validation(reason) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiErrorBody {
                    code: "VALIDATION_FAILED".to_string(),
                    message: reason.to_string(),
                },
            ),
            RosterError::DuplicateId(_) => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "DUPLICATE_ID".to_string(),
                    message: self.to_string(),
                },
            ),
            RosterError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: self.to_string(),
                },
            ),
            RosterError::AlreadyExists(_) => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "ALREADY_EXISTS".to_string(),
                    message: self.to_string(),
                },
            ),
            RosterError::InvalidCredentials | RosterError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHORIZED".to_string(),
                    message: self.to_string(),
                },
            ),
            RosterError::Storage(_) | RosterError::BlockingTask(_) => {
                error!(error = %self, "internal failure while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody {
                        code: "INTERNAL_ERROR".to_string(),
                        message: "An internal server error occurred.".to_string(),
                    },
                )
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

use serde_json::Value;
use thiserror::Error;

use shared_models::error::AppError;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("backend URL is not configured")]
    NotConfigured,

    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("backend error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("invalid backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl BackendError {
    /// Human readable message of a failed response. Uses the backend's
    /// `message`/`error` field when the body is JSON, the raw body otherwise.
    pub fn message(&self) -> String {
        match self {
            BackendError::NotFound(body) | BackendError::Status { body, .. } => {
                extract_message(body).unwrap_or_else(|| body.clone())
            }
            other => other.to_string(),
        }
    }
}

fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(String::from)
}

impl From<BackendError> for AppError {
    fn from(err: BackendError) -> Self {
        let message = err.message();
        match err {
            BackendError::NotConfigured => AppError::Internal(message),
            BackendError::NotFound(_) => AppError::NotFound(message),
            BackendError::Status { status, .. } => match status {
                400 | 422 => AppError::ValidationError(message),
                404 => AppError::NotFound(message),
                409 => AppError::Conflict(message),
                _ => AppError::ExternalService(format!("backend returned {}: {}", status, message)),
            },
            BackendError::Transport(_) | BackendError::Decode(_) => AppError::ExternalService(message),
        }
    }
}

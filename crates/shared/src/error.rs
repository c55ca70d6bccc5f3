use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    Internal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Why a raw update body could not become an `UpdateStateCommand`.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("malformed request body: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Every violated rule, in check order.
    #[error("{}", .0.join(","))]
    Invalid(Vec<String>),
}

impl From<CommandError> for ApiError {
    fn from(value: CommandError) -> Self {
        Self::new(ErrorCode::Validation, value.to_string())
    }
}

//! Uniform response shapes: a JSON payload on success, a bare status on failure.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use shared::error::{ApiError, ErrorCode};
use tracing::error;

pub(crate) fn succeed<T: Serialize>(payload: T) -> Response {
    match serde_json::to_vec(&payload) {
        Ok(body) => (
            StatusCode::OK,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )],
            body,
        )
            .into_response(),
        Err(error) => {
            error!(%error, "failed to encode response payload");
            fail(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub(crate) fn fail(status: StatusCode) -> Response {
    status.into_response()
}

/// A failed request. Carries only the status that reaches the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Failure(pub(crate) StatusCode);

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        fail(self.0)
    }
}

impl From<&ApiError> for Failure {
    fn from(value: &ApiError) -> Self {
        Self(match value.code {
            ErrorCode::Validation => StatusCode::BAD_REQUEST,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        })
    }
}

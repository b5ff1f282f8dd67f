//! JSON error responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::gate::AskError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

pub fn not_found(message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    error(StatusCode::NOT_FOUND, message)
}

impl AskError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AskError::InvalidInput => StatusCode::BAD_REQUEST,
            AskError::Busy => StatusCode::TOO_MANY_REQUESTS,
            AskError::UpstreamFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AskError {
    fn into_response(self) -> Response {
        error(self.status_code(), self.to_string()).into_response()
    }
}

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::response::{respond_with_json, INTERNAL_ERROR_BODY};
use crate::models::OperationResult;
use crate::services::DirectoryError;

/// Failures a relay request can end in. Each maps to exactly one response.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("External service error: {0}")]
    ExternalService(#[from] DirectoryError),

    #[error("Serialization error: {0}")]
    Serialization(serde_json::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            RelayError::BadRequest(detail) => respond_with_json(
                StatusCode::BAD_REQUEST,
                &OperationResult::failure(format!("Invalid visitor announcement: {}", detail)),
            ),
            RelayError::ExternalService(_) => respond_with_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                &OperationResult::failed(),
            ),
            RelayError::Serialization(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                INTERNAL_ERROR_BODY,
            )
                .into_response(),
        }
    }
}

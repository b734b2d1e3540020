use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::ser::Serialize;
use serde_json::ser::PrettyFormatter;

use super::error::RelayError;

/// Body sent when a payload cannot be encoded.
pub const INTERNAL_ERROR_BODY: &str = "HTTP 500: Internal Server Error";

const JSON_INDENT: &[u8] = b" ";

/// Write `payload` as indented JSON with `status`.
///
/// A payload that fails to serialize produces a plain-text 500 instead; the
/// requested status and JSON content type are never applied in that case.
pub fn respond_with_json<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Response {
    match to_indented_json(payload) {
        Ok(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response payload");
            RelayError::Serialization(e).into_response()
        }
    }
}

fn to_indented_json<T: Serialize + ?Sized>(payload: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(JSON_INDENT));
    payload.serialize(&mut serializer)?;
    Ok(buffer)
}

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::StatusCode,
    response::Response,
};

use super::error::RelayError;
use super::response::respond_with_json;
use crate::models::{OperationResult, VisitorAnnouncement};
use crate::AppState;

/// `POST /staff/:staff_id`: relay a visitor announcement to `staff_id`.
#[tracing::instrument(skip(state, body))]
pub async fn notify_staff(
    State(state): State<AppState>,
    Path(staff_id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, RelayError> {
    let body = body.map_err(|e| {
        tracing::warn!(error = %e, "Failed to read request body");
        RelayError::BadRequest(e.body_text())
    })?;

    let visitor: VisitorAnnouncement = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Rejected malformed visitor announcement");
        RelayError::BadRequest(e.to_string())
    })?;

    let message = visitor.to_message(&staff_id);

    let posted = state.directory.post_message(&message).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to send visitor notification");
        RelayError::from(e)
    })?;

    tracing::info!(ts = ?posted.ts, channel = ?posted.channel, "Visitor notification sent");

    Ok(respond_with_json(
        StatusCode::CREATED,
        &OperationResult::sent(),
    ))
}

use axum::{extract::State, http::StatusCode, response::Response};

use super::response::respond_with_json;
use crate::models::StaffMember;
use crate::services::UserRecord;
use crate::AppState;

/// `GET /staff`: the full directory as `[{id, profile}]`.
///
/// A failed fetch answers 500 with an empty list.
#[tracing::instrument(skip(state))]
pub async fn list_staff(State(state): State<AppState>) -> Response {
    let users = match state.directory.list_users().await {
        Ok(users) => users,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch staff directory");
            return respond_with_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                &Vec::<StaffMember>::new(),
            );
        }
    };

    let (bots, deactivated) = account_breakdown(&users);
    let staff: Vec<StaffMember> = users.into_iter().map(StaffMember::from).collect();

    tracing::info!(
        count = staff.len(),
        bots,
        deactivated,
        "Listed staff directory"
    );

    respond_with_json(StatusCode::CREATED, &staff)
}

/// Bot and deactivated account counts in a listing.
fn account_breakdown(users: &[UserRecord]) -> (usize, usize) {
    users.iter().fold((0, 0), |(bots, deactivated), user| {
        (
            bots + usize::from(user.is_bot),
            deactivated + usize::from(user.deleted),
        )
    })
}

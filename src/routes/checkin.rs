use axum::{extract::State, Json};
use serde::Deserialize;

use crate::error::Result;
use crate::models::{ApiResponse, Payload};
use crate::routes::validation::validate_email;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CheckinRequest {
    #[serde(default)]
    pub email: String,
}

/// Check in a user
///
/// Returns the user registered under the email, creating it on first
/// check-in. An unparseable body counts as a missing email.
///
/// POST /checkin
pub async fn checkin(
    State(state): State<AppState>,
    payload: Option<Json<CheckinRequest>>,
) -> Result<ApiResponse> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    validate_email(&payload.email)?;

    let user = state.repo.find_or_create_user(&payload.email).await?;

    Ok(ApiResponse::ok(Payload::User(user)))
}

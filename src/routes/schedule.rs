use axum::{
    async_trait,
    extract::{FromRequestParts, Query, State},
    http::request::Parts,
    Json,
};
use serde::Deserialize;

use crate::background::{spawn_delete, spawn_update};
use crate::db::{Repository, StoreError};
use crate::error::{AppError, Result};
use crate::models::{ApiResponse, Empty, Payload, Schedule, User};
use crate::routes::validation::{
    parse_day, parse_schedule_id, require_day, validate_email, validate_title,
};
use crate::AppState;

/// Query string shared by every `/schedule` method
///
/// Repeated keys keep their first value; unknown keys are ignored.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScheduleParams {
    pub email: String,
    pub day: Option<String>,
    pub id: Option<String>,
}

impl ScheduleParams {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let (mut email, mut day, mut id) = (None, None, None);

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "email" => &mut email,
                "day" => &mut day,
                "id" => &mut id,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        Self {
            email: email.unwrap_or_default(),
            day,
            id,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ScheduleParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidInput(e.body_text()))?;

        Ok(Self::from_pairs(pairs))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateScheduleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub day: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateScheduleRequest {
    #[serde(default)]
    pub title: String,
}

/// Look up the requesting user; absent users are 404, other failures 500
async fn resolve_user(repo: &Repository, email: &str) -> Result<User> {
    repo.get_user_by_email(email).await.map_err(|e| match e {
        StoreError::NotFound => AppError::UserNotFound,
        other => AppError::Store(other),
    })
}

/// Look up a schedule the user wants to mutate and check they own it
async fn resolve_owned_schedule(repo: &Repository, user: &User, id: i64) -> Result<Schedule> {
    let schedule = repo.get_schedule_by_id(id).await.map_err(|e| match e {
        StoreError::NotFound => AppError::ScheduleNotFound(id),
        other => AppError::Store(other),
    })?;

    if !schedule.is_owned_by(user.id) {
        tracing::warn!(
            "User {} attempted to modify schedule {} owned by user {}",
            user.id,
            schedule.id,
            schedule.user_id
        );
        return Err(AppError::Forbidden);
    }

    Ok(schedule)
}

/// List schedules
///
/// With `day`, returns the user's schedules on that day (possibly empty).
/// Without it, returns the number of schedules on each weekday.
///
/// GET /schedule?email=<email>&day=<day>
pub async fn list_schedules(
    State(state): State<AppState>,
    params: ScheduleParams,
) -> Result<ApiResponse> {
    validate_email(&params.email)?;

    let user = resolve_user(&state.repo, &params.email).await?;

    match params.day.as_deref().filter(|day| !day.is_empty()) {
        Some(day) => {
            let day = parse_day(day)?;
            let schedules = state.repo.get_schedules_for_user_on_day(user.id, day).await;
            Ok(ApiResponse::ok(Payload::Schedules(schedules)))
        }
        None => {
            let counts = state.repo.get_schedule_counts_per_day(user.id).await;
            Ok(ApiResponse::ok(Payload::DayCounts(counts)))
        }
    }
}

/// Create a schedule for the user
///
/// POST /schedule?email=<email>
pub async fn create_schedule(
    State(state): State<AppState>,
    params: ScheduleParams,
    payload: Option<Json<CreateScheduleRequest>>,
) -> Result<ApiResponse> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    validate_email(&params.email)?;
    validate_title(&payload.title)?;
    let day = require_day(&payload.day)?;

    let user = resolve_user(&state.repo, &params.email).await?;

    let schedule = state
        .repo
        .create_schedule(user.id, &payload.title, day)
        .await?;

    Ok(ApiResponse::created(Payload::Schedule(schedule)))
}

/// Delete one of the user's schedules
///
/// The delete runs in the background; the response does not wait for it and
/// does not reflect whether it succeeded.
///
/// DELETE /schedule?email=<email>&id=<id>
pub async fn delete_schedule(
    State(state): State<AppState>,
    params: ScheduleParams,
) -> Result<ApiResponse> {
    validate_email(&params.email)?;
    let id = parse_schedule_id(params.id.as_deref());

    let user = resolve_user(&state.repo, &params.email).await?;
    let schedule = resolve_owned_schedule(&state.repo, &user, id).await?;

    spawn_delete(state.repo.clone(), schedule.id);

    Ok(ApiResponse::ok(Payload::Empty(Empty {})))
}

/// Rename one of the user's schedules
///
/// Responds with the renamed schedule immediately; persistence runs in the
/// background and its outcome is not reported.
///
/// PATCH /schedule?email=<email>&id=<id>
pub async fn update_schedule(
    State(state): State<AppState>,
    params: ScheduleParams,
    payload: Option<Json<UpdateScheduleRequest>>,
) -> Result<ApiResponse> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    validate_email(&params.email)?;
    let id = parse_schedule_id(params.id.as_deref());

    let user = resolve_user(&state.repo, &params.email).await?;
    let mut schedule = resolve_owned_schedule(&state.repo, &user, id).await?;

    validate_title(&payload.title)?;
    schedule.title = payload.title;

    spawn_update(state.repo.clone(), schedule.clone());

    Ok(ApiResponse::created(Payload::Schedule(schedule)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_params_first_occurrence_wins() {
        let params = ScheduleParams::from_pairs(pairs(&[
            ("email", "a@b.com"),
            ("day", "monday"),
            ("email", "c@d.com"),
            ("day", "friday"),
            ("id", "3"),
            ("id", "4"),
        ]));

        assert_eq!(
            params,
            ScheduleParams {
                email: "a@b.com".to_string(),
                day: Some("monday".to_string()),
                id: Some("3".to_string()),
            }
        );
    }

    #[test]
    fn test_params_missing_and_unknown_keys() {
        let params = ScheduleParams::from_pairs(pairs(&[("page", "2")]));

        assert_eq!(params, ScheduleParams::default());
    }
}

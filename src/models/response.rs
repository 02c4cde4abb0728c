use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::{DayCounts, Schedule, User};
use crate::constants::MSG_SUCCESS;

/// Uniform JSON body returned by every endpoint
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Payload>,
}

/// Serializes as `{}`
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Empty {}

/// Result data carried in a success envelope
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Payload {
    User(User),
    Schedule(Schedule),
    Schedules(Vec<Schedule>),
    DayCounts(DayCounts),
    Empty(Empty),
}

/// Success response: status code plus payload
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub payload: Payload,
}

impl ApiResponse {
    pub fn ok(payload: Payload) -> Self {
        Self {
            status: StatusCode::OK,
            payload,
        }
    }

    pub fn created(payload: Payload) -> Self {
        Self {
            status: StatusCode::CREATED,
            payload,
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let body = Json(Envelope {
            status: MSG_SUCCESS.to_string(),
            message: MSG_SUCCESS.to_string(),
            data: Some(self.payload),
        });

        (self.status, body).into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::constants::{ERR_ACCESS_DENIED, ERR_EMAIL_NOT_FOUND, ERR_INTERNAL};
use crate::db::StoreError;
use crate::models::Envelope;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{}", ERR_EMAIL_NOT_FOUND)]
    UserNotFound,

    #[error("Schedule with ID {0} Not Found")]
    ScheduleNotFound(i64),

    #[error("{}", ERR_ACCESS_DENIED)]
    Forbidden,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::UserNotFound | AppError::ScheduleNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden => StatusCode::FORBIDDEN,
        }
    }
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            AppError::Store(ref e) => {
                tracing::error!("Store error: {:?}", e);
                ERR_INTERNAL.to_string()
            }
            AppError::InvalidInput(msg) => msg,
            other => other.to_string(),
        };

        let body = Json(Envelope {
            status: status.canonical_reason().unwrap_or("Error").to_string(),
            message,
            data: None,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::InvalidInput("Email is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::ScheduleNotFound(3).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::from(StoreError::NotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(AppError::UserNotFound.to_string(), "Email is not found");
        assert_eq!(
            AppError::ScheduleNotFound(12).to_string(),
            "Schedule with ID 12 Not Found"
        );
        assert_eq!(AppError::Forbidden.to_string(), "Access denied!");
    }
}

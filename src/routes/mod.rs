pub mod checkin;
pub mod health;
pub mod schedule;
pub mod validation;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub use checkin::checkin;
pub use health::health_check;
pub use schedule::{create_schedule, delete_schedule, list_schedules, update_schedule};

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/checkin", post(checkin))
        .route(
            "/schedule",
            get(list_schedules)
                .post(create_schedule)
                .delete(delete_schedule)
                .patch(update_schedule),
        )
        .with_state(state)
}

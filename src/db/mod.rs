pub mod memory;
pub mod mysql;
pub mod pool;
pub mod repository;
pub mod schema;

use async_trait::async_trait;

use crate::models::{Schedule, User, Weekday};

pub use memory::MemoryStore;
pub use mysql::MySqlStore;
pub use pool::create_pool;
pub use repository::Repository;
pub use schema::ensure_schema;

/// Errors raised by a store backend
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Query matched no row
    #[error("Row not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// Row exists but cannot be mapped to a model
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Database(other),
        }
    }
}

/// Raw data access for the `users` and `schedules` tables
///
/// Implementations report every failure; the policy of which failures are
/// swallowed lives in [`Repository`].
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Exact email match, `StoreError::NotFound` when absent
    async fn find_user_by_email(&self, email: &str) -> Result<User, StoreError>;

    async fn insert_user(&self, email: &str) -> Result<User, StoreError>;

    async fn insert_schedule(
        &self,
        user_id: i64,
        title: &str,
        day: Weekday,
    ) -> Result<Schedule, StoreError>;

    /// `StoreError::NotFound` when no schedule has this id
    async fn find_schedule(&self, id: i64) -> Result<Schedule, StoreError>;

    async fn schedules_for_user_on_day(
        &self,
        user_id: i64,
        day: Weekday,
    ) -> Result<Vec<Schedule>, StoreError>;

    /// `(day, count)` rows, only for days with at least one schedule
    async fn count_schedules_by_day(&self, user_id: i64) -> Result<Vec<(String, i64)>, StoreError>;

    async fn update_schedule(&self, id: i64, title: &str, day: Weekday) -> Result<(), StoreError>;

    async fn delete_schedule(&self, id: i64) -> Result<(), StoreError>;

    /// Connectivity probe
    async fn ping(&self) -> Result<(), StoreError>;
}

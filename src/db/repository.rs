use std::sync::Arc;

use super::{ScheduleStore, StoreError};
use crate::models::{DayCounts, Schedule, User, Weekday};

/// Data-access operations used by the request handlers
///
/// Wraps a [`ScheduleStore`] backend and applies the lookup policies:
/// find-or-create for users, and error swallowing for the day-filter and
/// day-count queries.
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn ScheduleStore>,
}

impl Repository {
    pub fn new(store: Arc<dyn ScheduleStore>) -> Self {
        Self { store }
    }

    /// Return the user registered under `email`, inserting one if absent
    ///
    /// Lookup and insert are separate statements, so two concurrent
    /// check-ins for a new email can both insert.
    pub async fn find_or_create_user(&self, email: &str) -> Result<User, StoreError> {
        match self.store.find_user_by_email(email).await {
            Ok(user) => Ok(user),
            Err(StoreError::NotFound) => {
                let user = self.store.insert_user(email).await?;
                tracing::info!("New user checked in: id {}", user.id);
                Ok(user)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<User, StoreError> {
        self.store.find_user_by_email(email).await
    }

    pub async fn create_schedule(
        &self,
        user_id: i64,
        title: &str,
        day: Weekday,
    ) -> Result<Schedule, StoreError> {
        let schedule = self.store.insert_schedule(user_id, title, day).await?;
        tracing::debug!("Schedule {} created for user {}", schedule.id, user_id);
        Ok(schedule)
    }

    pub async fn get_schedule_by_id(&self, id: i64) -> Result<Schedule, StoreError> {
        self.store.find_schedule(id).await
    }

    /// Schedules owned by `user_id` on `day`; empty on query failure
    pub async fn get_schedules_for_user_on_day(&self, user_id: i64, day: Weekday) -> Vec<Schedule> {
        match self.store.schedules_for_user_on_day(user_id, day).await {
            Ok(schedules) => schedules,
            Err(e) => {
                tracing::warn!("Schedule lookup for user {} on {} failed: {}", user_id, day, e);
                Vec::new()
            }
        }
    }

    /// Per-weekday schedule counts for `user_id`
    ///
    /// Every weekday starts at zero; the grouped query only reports days with
    /// at least one schedule. A failed query yields all zeros.
    pub async fn get_schedule_counts_per_day(&self, user_id: i64) -> DayCounts {
        let mut counts = DayCounts::default();

        let rows = match self.store.count_schedules_by_day(user_id).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!("Schedule count for user {} failed: {}", user_id, e);
                return counts;
            }
        };

        for (day, count) in rows {
            match day.parse::<Weekday>() {
                Ok(day) => counts.set(day, count),
                Err(e) => tracing::debug!("Ignoring count row: {}", e),
            }
        }

        counts
    }

    pub async fn update_schedule(&self, id: i64, title: &str, day: Weekday) -> Result<(), StoreError> {
        self.store.update_schedule(id, title, day).await
    }

    pub async fn delete_schedule(&self, id: i64) -> Result<(), StoreError> {
        self.store.delete_schedule(id).await
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}

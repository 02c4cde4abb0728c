use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{ScheduleStore, StoreError};
use crate::models::{Schedule, User, Weekday};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    schedules: BTreeMap<i64, Schedule>,
    next_user_id: i64,
    next_schedule_id: i64,
}

/// In-process store with the same identity semantics as the MySQL tables
///
/// Ids start at 1 and are never reused. Used by the test suites and for
/// running the server without a database.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ScheduleStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<User, StoreError> {
        self.lock()
            .users
            .iter()
            .find(|user| user.email == email)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn insert_user(&self, email: &str) -> Result<User, StoreError> {
        let mut tables = self.lock();
        tables.next_user_id += 1;

        let user = User {
            id: tables.next_user_id,
            email: email.to_string(),
        };
        tables.users.push(user.clone());

        Ok(user)
    }

    async fn insert_schedule(
        &self,
        user_id: i64,
        title: &str,
        day: Weekday,
    ) -> Result<Schedule, StoreError> {
        let mut tables = self.lock();

        // Foreign key on schedules.user_id
        if !tables.users.iter().any(|user| user.id == user_id) {
            return Err(StoreError::NotFound);
        }

        tables.next_schedule_id += 1;
        let schedule = Schedule {
            id: tables.next_schedule_id,
            user_id,
            title: title.to_string(),
            day,
        };
        tables.schedules.insert(schedule.id, schedule.clone());

        Ok(schedule)
    }

    async fn find_schedule(&self, id: i64) -> Result<Schedule, StoreError> {
        self.lock()
            .schedules
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn schedules_for_user_on_day(
        &self,
        user_id: i64,
        day: Weekday,
    ) -> Result<Vec<Schedule>, StoreError> {
        Ok(self
            .lock()
            .schedules
            .values()
            .filter(|s| s.user_id == user_id && s.day == day)
            .cloned()
            .collect())
    }

    async fn count_schedules_by_day(&self, user_id: i64) -> Result<Vec<(String, i64)>, StoreError> {
        let mut counts: BTreeMap<&'static str, i64> = BTreeMap::new();
        for schedule in self.lock().schedules.values() {
            if schedule.user_id == user_id {
                *counts.entry(schedule.day.as_str()).or_default() += 1;
            }
        }

        Ok(counts
            .into_iter()
            .map(|(day, count)| (day.to_string(), count))
            .collect())
    }

    async fn update_schedule(&self, id: i64, title: &str, day: Weekday) -> Result<(), StoreError> {
        // Matches SQL UPDATE: no matching row is not an error
        if let Some(schedule) = self.lock().schedules.get_mut(&id) {
            schedule.title = title.to_string();
            schedule.day = day;
        }
        Ok(())
    }

    async fn delete_schedule(&self, id: i64) -> Result<(), StoreError> {
        self.lock().schedules.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_start_at_one_and_increment() {
        let store = MemoryStore::new();

        let first = store.insert_user("a@b.com").await.unwrap();
        let second = store.insert_user("c@d.com").await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_find_user_not_found() {
        let store = MemoryStore::new();

        assert!(matches!(
            store.find_user_by_email("nobody@b.com").await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_insert_schedule_requires_existing_user() {
        let store = MemoryStore::new();

        assert!(matches!(
            store.insert_schedule(42, "Math", Weekday::Monday).await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_count_only_returns_days_with_schedules() {
        let store = MemoryStore::new();
        let user = store.insert_user("a@b.com").await.unwrap();
        let other = store.insert_user("c@d.com").await.unwrap();

        store.insert_schedule(user.id, "Math", Weekday::Monday).await.unwrap();
        store.insert_schedule(user.id, "Art", Weekday::Monday).await.unwrap();
        store.insert_schedule(user.id, "Gym", Weekday::Friday).await.unwrap();
        store.insert_schedule(other.id, "Chess", Weekday::Tuesday).await.unwrap();

        let mut rows = store.count_schedules_by_day(user.id).await.unwrap();
        rows.sort();

        assert_eq!(
            rows,
            vec![("friday".to_string(), 1), ("monday".to_string(), 2)]
        );
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let store = MemoryStore::new();
        let user = store.insert_user("a@b.com").await.unwrap();
        let schedule = store
            .insert_schedule(user.id, "Math", Weekday::Monday)
            .await
            .unwrap();

        store
            .update_schedule(schedule.id, "Physics", Weekday::Monday)
            .await
            .unwrap();
        assert_eq!(store.find_schedule(schedule.id).await.unwrap().title, "Physics");

        store.delete_schedule(schedule.id).await.unwrap();
        assert!(matches!(
            store.find_schedule(schedule.id).await,
            Err(StoreError::NotFound)
        ));

        // Deleting again is a no-op, like DELETE on a missing row
        assert!(store.delete_schedule(schedule.id).await.is_ok());
    }
}

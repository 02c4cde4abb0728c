use async_trait::async_trait;
use sqlx::{mysql::MySqlRow, MySqlPool, Row};

use super::{ScheduleStore, StoreError};
use crate::models::{Schedule, User, Weekday};

/// Store backed by a MySQL connection pool
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

/// Map a `schedules` row, rejecting day values outside the whitelist
fn schedule_from_row(row: &MySqlRow) -> Result<Schedule, StoreError> {
    let day: String = row.try_get("day")?;
    let day = day
        .parse::<Weekday>()
        .map_err(|e| StoreError::Decode(e.to_string()))?;

    Ok(Schedule {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        title: row.try_get("title")?,
        day,
    })
}

#[async_trait]
impl ScheduleStore for MySqlStore {
    async fn find_user_by_email(&self, email: &str) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT id, email FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(user)
    }

    async fn insert_user(&self, email: &str) -> Result<User, StoreError> {
        let result = sqlx::query("INSERT INTO users (email) VALUES (?)")
            .bind(email)
            .execute(&self.pool)
            .await?;

        Ok(User {
            id: result.last_insert_id() as i64,
            email: email.to_string(),
        })
    }

    async fn insert_schedule(
        &self,
        user_id: i64,
        title: &str,
        day: Weekday,
    ) -> Result<Schedule, StoreError> {
        let result = sqlx::query("INSERT INTO schedules (user_id, title, day) VALUES (?, ?, ?)")
            .bind(user_id)
            .bind(title)
            .bind(day.as_str())
            .execute(&self.pool)
            .await?;

        Ok(Schedule {
            id: result.last_insert_id() as i64,
            user_id,
            title: title.to_string(),
            day,
        })
    }

    async fn find_schedule(&self, id: i64) -> Result<Schedule, StoreError> {
        let row = sqlx::query("SELECT id, user_id, title, day FROM schedules WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        schedule_from_row(&row)
    }

    async fn schedules_for_user_on_day(
        &self,
        user_id: i64,
        day: Weekday,
    ) -> Result<Vec<Schedule>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, user_id, title, day FROM schedules WHERE user_id = ? AND day = ?",
        )
        .bind(user_id)
        .bind(day.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(schedule_from_row).collect()
    }

    async fn count_schedules_by_day(&self, user_id: i64) -> Result<Vec<(String, i64)>, StoreError> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT day, COUNT(*) FROM schedules WHERE user_id = ? GROUP BY day",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn update_schedule(&self, id: i64, title: &str, day: Weekday) -> Result<(), StoreError> {
        sqlx::query("UPDATE schedules SET title = ?, day = ? WHERE id = ?")
            .bind(title)
            .bind(day.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_schedule(&self, id: i64) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM schedules WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

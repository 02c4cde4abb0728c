use serde::Serialize;

use super::Weekday;

/// Titled entry on one weekday, owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub day: Weekday,
}

impl Schedule {
    /// Ownership check: only the owning user may mutate a schedule
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_json_shape() {
        let schedule = Schedule {
            id: 7,
            user_id: 1,
            title: "Math".to_string(),
            day: Weekday::Monday,
        };

        let value = serde_json::to_value(&schedule).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "id": 7, "user_id": 1, "title": "Math", "day": "monday" })
        );
    }

    #[test]
    fn test_is_owned_by() {
        let schedule = Schedule {
            id: 1,
            user_id: 3,
            title: "Gym".to_string(),
            day: Weekday::Friday,
        };

        assert!(schedule.is_owned_by(3));
        assert!(!schedule.is_owned_by(4));
    }
}

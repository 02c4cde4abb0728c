use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Day a schedule entry is assigned to (working week only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

/// Every accepted day, in week order
pub const WEEKDAYS: [Weekday; 5] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
];

/// Returned when a string is not one of the five lowercase weekday names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid weekday: {0:?}")]
pub struct InvalidWeekday(pub String);

impl Weekday {
    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
        }
    }
}

impl FromStr for Weekday {
    type Err = InvalidWeekday;

    /// Exact, case-sensitive match against the whitelist
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WEEKDAYS
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| InvalidWeekday(s.to_string()))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of schedules a user has on each weekday
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayCounts {
    pub monday: i64,
    pub tuesday: i64,
    pub wednesday: i64,
    pub thursday: i64,
    pub friday: i64,
}

impl DayCounts {
    pub fn set(&mut self, day: Weekday, count: i64) {
        match day {
            Weekday::Monday => self.monday = count,
            Weekday::Tuesday => self.tuesday = count,
            Weekday::Wednesday => self.wednesday = count,
            Weekday::Thursday => self.thursday = count,
            Weekday::Friday => self.friday = count,
        }
    }

    pub fn get(&self, day: Weekday) -> i64 {
        match day {
            Weekday::Monday => self.monday,
            Weekday::Tuesday => self.tuesday,
            Weekday::Wednesday => self.wednesday,
            Weekday::Thursday => self.thursday,
            Weekday::Friday => self.friday,
        }
    }

    pub fn total(&self) -> i64 {
        WEEKDAYS.into_iter().map(|day| self.get(day)).sum()
    }
}

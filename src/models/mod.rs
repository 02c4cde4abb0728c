pub mod response;
pub mod schedule;
pub mod user;
pub mod weekday;

pub use response::{ApiResponse, Empty, Envelope, Payload};
pub use schedule::Schedule;
pub use user::User;
pub use weekday::{DayCounts, InvalidWeekday, Weekday, WEEKDAYS};

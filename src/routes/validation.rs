use validator::ValidateEmail;

use crate::constants::{
    ERR_DAY_INVALID, ERR_DAY_REQUIRED, ERR_EMAIL_REQUIRED, ERR_INVALID_EMAIL, ERR_TITLE_REQUIRED,
    ERR_TITLE_TOO_LONG, MAX_EMAIL_LEN, MAX_TITLE_LEN,
};
use crate::error::AppError;
use crate::models::Weekday;

/// Whether `value` fits a column of `max` characters
pub fn fits_column(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

/// Require a non-empty, well-formed email address
pub fn validate_email(email: &str) -> Result<(), AppError> {
    if email.is_empty() {
        return Err(AppError::InvalidInput(ERR_EMAIL_REQUIRED.to_string()));
    }

    if !fits_column(email, MAX_EMAIL_LEN) || !email.validate_email() {
        tracing::debug!("Rejected email: {}", email);
        return Err(AppError::InvalidInput(ERR_INVALID_EMAIL.to_string()));
    }

    Ok(())
}

/// Parse a weekday from the whitelist
pub fn parse_day(day: &str) -> Result<Weekday, AppError> {
    day.parse()
        .map_err(|_| AppError::InvalidInput(ERR_DAY_INVALID.to_string()))
}

/// Parse a weekday that the operation requires
pub fn require_day(day: &str) -> Result<Weekday, AppError> {
    if day.is_empty() {
        return Err(AppError::InvalidInput(ERR_DAY_REQUIRED.to_string()));
    }
    parse_day(day)
}

/// Require a non-empty title that fits the column
pub fn validate_title(title: &str) -> Result<(), AppError> {
    if title.is_empty() {
        return Err(AppError::InvalidInput(ERR_TITLE_REQUIRED.to_string()));
    }

    if !fits_column(title, MAX_TITLE_LEN) {
        return Err(AppError::InvalidInput(ERR_TITLE_TOO_LONG.to_string()));
    }

    Ok(())
}

/// Read a schedule id from the query string; missing or malformed ids are 0
///
/// Id 0 never matches a row, so the lookup that follows reports 404.
pub fn parse_schedule_id(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: AppError) -> String {
        match err {
            AppError::InvalidInput(msg) => msg,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("first.last+tag@example.co.id").is_ok());

        assert_eq!(message(validate_email("").unwrap_err()), "Email is required");
        assert_eq!(message(validate_email("not-an-email").unwrap_err()), "Invalid email");
        assert_eq!(message(validate_email("a@").unwrap_err()), "Invalid email");
        assert_eq!(message(validate_email("@b.com").unwrap_err()), "Invalid email");

        let long = format!("{}@b.com", "a".repeat(MAX_EMAIL_LEN));
        assert_eq!(message(validate_email(&long).unwrap_err()), "Invalid email");
    }

    #[test]
    fn test_length_limits_count_characters() {
        // 2 bytes per 'é'
        let title = "é".repeat(MAX_TITLE_LEN);
        assert!(title.len() > MAX_TITLE_LEN);
        assert!(fits_column(&title, MAX_TITLE_LEN));
        assert!(validate_title(&title).is_ok());
        assert!(!fits_column(&format!("{title}é"), MAX_TITLE_LEN));

        let local = "é".repeat(MAX_EMAIL_LEN - "@b.com".len());
        let email = format!("{local}@b.com");
        assert!(email.len() > MAX_EMAIL_LEN);
        assert!(fits_column(&email, MAX_EMAIL_LEN));
        assert!(!fits_column(&format!("é{email}"), MAX_EMAIL_LEN));
    }

    #[test]
    fn test_day_validation() {
        assert_eq!(parse_day("thursday").unwrap(), Weekday::Thursday);
        assert_eq!(message(parse_day("sunday").unwrap_err()), "Day is invalid");
        assert_eq!(message(require_day("").unwrap_err()), "Day is required");
        assert_eq!(message(require_day("Friday").unwrap_err()), "Day is invalid");
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Math").is_ok());
        assert!(validate_title(&"x".repeat(MAX_TITLE_LEN)).is_ok());

        assert_eq!(message(validate_title("").unwrap_err()), "Title is required");
        assert_eq!(
            message(validate_title(&"x".repeat(MAX_TITLE_LEN + 1)).unwrap_err()),
            "Title must be at most 50 characters"
        );
    }

    #[test]
    fn test_parse_schedule_id() {
        assert_eq!(parse_schedule_id(Some("17")), 17);
        assert_eq!(parse_schedule_id(Some("abc")), 0);
        assert_eq!(parse_schedule_id(Some("")), 0);
        assert_eq!(parse_schedule_id(None), 0);
    }
}

/// Maximum schedule title length (matches the `schedules.title` column width)
pub const MAX_TITLE_LEN: usize = 50;

/// Maximum email length (matches the `users.email` column width)
pub const MAX_EMAIL_LEN: usize = 100;

// =============================================================================
// Response Messages
// =============================================================================

/// Message for successful responses
pub const MSG_SUCCESS: &str = "Success";

/// Email query/body parameter missing or empty
pub const ERR_EMAIL_REQUIRED: &str = "Email is required";

/// Email does not parse as a mail address
pub const ERR_INVALID_EMAIL: &str = "Invalid email";

/// No user registered under the requested email
pub const ERR_EMAIL_NOT_FOUND: &str = "Email is not found";

/// Title missing or empty
pub const ERR_TITLE_REQUIRED: &str = "Title is required";

/// Title longer than the column allows
pub const ERR_TITLE_TOO_LONG: &str = "Title must be at most 50 characters";

/// Day missing or empty
pub const ERR_DAY_REQUIRED: &str = "Day is required";

/// Day outside the weekday whitelist
pub const ERR_DAY_INVALID: &str = "Day is invalid";

/// Schedule belongs to another user
pub const ERR_ACCESS_DENIED: &str = "Access denied!";

/// Generic message for store failures (details are only logged)
pub const ERR_INTERNAL: &str = "Something went wrong";

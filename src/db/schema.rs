use sqlx::MySqlPool;

/// `users`: one row per checked-in email
pub const CREATE_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id BIGINT AUTO_INCREMENT PRIMARY KEY,
    email VARCHAR(100) NOT NULL
)";

/// `schedules`: entries owned by a user, indexed by day
pub const CREATE_SCHEDULES: &str = "CREATE TABLE IF NOT EXISTS schedules (
    id BIGINT AUTO_INCREMENT PRIMARY KEY,
    user_id BIGINT NOT NULL,
    title VARCHAR(50) NOT NULL,
    day VARCHAR(10) NOT NULL,
    INDEX idx_day (day),
    FOREIGN KEY (user_id) REFERENCES users(id)
)";

/// Create both tables if they don't exist yet
///
/// Runs on every startup; existing tables are left untouched.
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring database schema...");

    sqlx::query(CREATE_USERS).execute(pool).await?;
    sqlx::query(CREATE_SCHEDULES).execute(pool).await?;

    tracing::info!("Database schema ready");

    Ok(())
}

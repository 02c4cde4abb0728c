use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use std::time::Duration;

use crate::config::Config;

/// Create a MySQL connection pool from the loaded configuration
pub async fn create_pool(config: &Config) -> Result<MySqlPool, sqlx::Error> {
    tracing::info!(
        "Creating database connection pool for {}:{}/{}...",
        config.mysql_host,
        config.mysql_port,
        config.mysql_database
    );

    let options = MySqlConnectOptions::new()
        .host(&config.mysql_host)
        .port(config.mysql_port)
        .username(&config.mysql_user)
        .password(&config.mysql_password)
        .database(&config.mysql_database)
        .charset("utf8mb4");

    let pool = MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime_secs))
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");

    Ok(pool)
}

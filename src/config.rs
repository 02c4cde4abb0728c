use std::env;
use std::str::FromStr;

/// Which store backend the server runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MySql,
    /// In-process tables, lost on restart
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mysql" => Ok(StoreBackend::MySql),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("Invalid STORE_BACKEND: {other}")),
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub store_backend: StoreBackend,
    pub mysql_host: String,
    pub mysql_port: u16,
    pub mysql_user: String,
    pub mysql_password: String,
    pub mysql_database: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_idle_timeout_secs: u64,
    pub db_max_lifetime_secs: u64,
    /// Empty means any origin is allowed
    pub allowed_origins: Vec<String>,
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        fn parse<T: FromStr>(key: &str, raw: String) -> Result<T, String> {
            raw.trim().parse().map_err(|_| format!("Invalid {key}: {raw}"))
        }

        let server_host = var("SERVER_HOST", "0.0.0.0");
        let server_port = parse("SERVER_PORT", var("SERVER_PORT", "3030"))?;

        let store_backend = var("STORE_BACKEND", "mysql").parse()?;

        let mysql_host = var("MYSQL_HOST", "localhost");
        let mysql_port = parse("MYSQL_PORT", var("MYSQL_PORT", "3306"))?;
        let mysql_user = var("MYSQL_USER", "root");
        let mysql_password = var("MYSQL_PASSWORD", "");
        let mysql_database = var("MYSQL_DBNAME", "get_jadwal");

        let db_max_connections = parse("DB_MAX_CONNECTIONS", var("DB_MAX_CONNECTIONS", "100"))?;
        let db_min_connections = parse("DB_MIN_CONNECTIONS", var("DB_MIN_CONNECTIONS", "0"))?;
        let db_idle_timeout_secs =
            parse("DB_IDLE_TIMEOUT_SECS", var("DB_IDLE_TIMEOUT_SECS", "600"))?;
        let db_max_lifetime_secs =
            parse("DB_MAX_LIFETIME_SECS", var("DB_MAX_LIFETIME_SECS", "18000"))?;

        let allowed_origins = var("ALLOWED_ORIGINS", "")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let environment = var("ENVIRONMENT", "development");

        Ok(Config {
            server_host,
            server_port,
            store_backend,
            mysql_host,
            mysql_port,
            mysql_user,
            mysql_password,
            mysql_database,
            db_max_connections,
            db_min_connections,
            db_idle_timeout_secs,
            db_max_lifetime_secs,
            allowed_origins,
            environment,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

//! Cloud service configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Cloud service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// Maximum pooled connections
    pub db_max_connections: u32,
    /// Environment: development | staging | production
    pub environment: String,
    /// Seconds between two expiry sweeps
    pub sweep_interval_secs: u64,
    /// Stores transitioned concurrently within one sweep
    pub sweep_concurrency: usize,
    /// Log level filter (overridden by RUST_LOG)
    pub log_level: String,
    /// JSON log output
    pub log_json: bool,
    /// Directory for rotating log files; console only when unset
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(environment == "production"),
            environment,
            sweep_interval_secs: std::env::var("SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|p| p.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(3600),
            sweep_concurrency: std::env::var("SWEEP_CONCURRENCY")
                .ok()
                .and_then(|p| p.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(4),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
        })
    }

    pub fn sweep_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.sweep_interval_secs)
    }
}

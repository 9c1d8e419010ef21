//! Card server configuration

use reap_client::TransportConfig;
use std::time::Duration;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Card server configuration
#[derive(Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// Maximum pooled database connections
    pub db_max_connections: u32,
    /// HTTP listening port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Deadline for a single inbound request
    pub request_timeout: Duration,
    /// Provider base URL
    pub reap_base_url: String,
    /// Provider API key
    pub reap_api_key: String,
    /// Provider connection pool and timeout tuning
    pub reap_transport: TransportConfig,
    /// Emit JSON log lines instead of text
    pub log_json: bool,
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development environments.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let defaults = TransportConfig::default();

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            db_max_connections: env_parse("DB_MAX_CONNECTIONS").unwrap_or(10),
            http_port: env_parse("HTTP_PORT").unwrap_or(9000),
            request_timeout: env_millis("REQUEST_TIMEOUT_MS")
                .unwrap_or(Duration::from_secs(10)),
            reap_base_url: std::env::var("REAP_BASE_URL").map_err(|_| "REAP_BASE_URL must be set")?,
            reap_api_key: Self::require_secret("REAP_API_KEY", &environment)?,
            reap_transport: TransportConfig {
                timeout: env_millis("REAP_TIMEOUT_MS").unwrap_or(defaults.timeout),
                connect_timeout: env_millis("REAP_CONNECT_TIMEOUT_MS")
                    .unwrap_or(defaults.connect_timeout),
                pool_idle_timeout: env_millis("REAP_POOL_IDLE_TIMEOUT_MS")
                    .unwrap_or(defaults.pool_idle_timeout),
                pool_max_idle_per_host: env_parse("REAP_POOL_MAX_IDLE_PER_HOST")
                    .unwrap_or(defaults.pool_max_idle_per_host),
                ..defaults
            },
            log_json: std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")),
            environment,
        })
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

fn env_millis(name: &str) -> Option<Duration> {
    env_parse::<u64>(name).map(Duration::from_millis)
}

// Secrets stay out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"<redacted>")
            .field("db_max_connections", &self.db_max_connections)
            .field("http_port", &self.http_port)
            .field("environment", &self.environment)
            .field("request_timeout", &self.request_timeout)
            .field("reap_base_url", &self.reap_base_url)
            .field("reap_api_key", &"<redacted>")
            .field("reap_transport", &self.reap_transport)
            .field("log_json", &self.log_json)
            .finish()
    }
}

//! Client configuration

use std::time::Duration;

/// Protocol version sent in the `accept-version` header
pub const DEFAULT_API_VERSION: &str = "v1.0";

/// Connection pool and timeout tuning for the provider endpoint
///
/// Passed explicitly to [`crate::ReapClient::new`]; nothing is read from
/// process-wide defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Whole-request timeout
    pub timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// TCP keepalive interval
    pub tcp_keepalive: Duration,
    /// How long an idle pooled connection is kept
    pub pool_idle_timeout: Duration,
    /// Upper bound of idle connections kept per host
    pub pool_max_idle_per_host: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            connect_timeout: Duration::from_secs(15),
            tcp_keepalive: Duration::from_secs(30),
            pool_idle_timeout: Duration::from_secs(60),
            pool_max_idle_per_host: 100,
        }
    }
}

impl TransportConfig {
    /// Build a reqwest client honoring this tuning
    pub fn build_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .tcp_keepalive(self.tcp_keepalive)
            .pool_idle_timeout(self.pool_idle_timeout)
            .pool_max_idle_per_host(self.pool_max_idle_per_host)
            .build()
    }
}

/// Configuration for connecting to the card-issuing provider
#[derive(Clone)]
pub struct ClientConfig {
    /// Provider base URL (e.g., "https://sandbox.example.xyz")
    pub base_url: String,

    /// Static API key sent as `x-reap-api-key`
    pub api_key: String,

    /// Protocol version sent as `accept-version`
    pub api_version: String,

    /// Connection pool and timeout tuning
    pub transport: TransportConfig,
}

impl ClientConfig {
    /// Create a new configuration with default transport tuning
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            transport: TransportConfig::default(),
        }
    }

    /// Replace the transport tuning
    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }

    /// Set the whole-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.transport.timeout = timeout;
        self
    }
}

// The API key never shows up in logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("transport", &self.transport)
            .finish()
    }
}

//! Gateway configuration

/// Base URL the upstream employee API listens on by default.
pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8112/api/v1/employee";

/// Gateway configuration for connecting to the upstream employee API
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Upstream base URL (e.g., "http://localhost:8112/api/v1/employee")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl GatewayConfig {
    /// Create a new gateway configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_UPSTREAM_URL)
    }
}

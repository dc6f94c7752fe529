use roster_gateway::GatewayConfig;
use roster_gateway::config::DEFAULT_UPSTREAM_URL;

/// Server configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 8111 | facade listen port |
/// | EMPLOYEE_API_URL | http://localhost:8112/api/v1/employee | upstream base URL |
/// | EMPLOYEE_API_TIMEOUT_SECS | 30 | upstream request timeout |
/// | ENVIRONMENT | development | runtime environment |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 EMPLOYEE_API_URL=http://employees.internal/api/v1/employee cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API listen port
    pub http_port: u16,
    /// Upstream employee API connection settings
    pub gateway: GatewayConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("EMPLOYEE_API_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.into());
        let timeout = std::env::var("EMPLOYEE_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8111),
            gateway: GatewayConfig::new(base_url).with_timeout(timeout),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the port and upstream URL, keeping the rest from the
    /// environment; used by tests
    pub fn with_overrides(http_port: u16, upstream_url: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.gateway.base_url = upstream_url.into();
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

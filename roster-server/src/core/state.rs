use std::sync::Arc;

use roster_gateway::UpstreamClient;

use crate::core::Config;
use crate::services::EmployeeService;

/// Shared application state
///
/// Holds the configuration and the employee service every handler runs
/// through. Cloning is shallow; the service shares one gateway client.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Employee aggregation service
    pub employees: EmployeeService,
}

impl ServerState {
    /// Build state from configuration, wiring the service to the real
    /// upstream gateway
    pub fn initialize(config: &Config) -> Self {
        let gateway = UpstreamClient::new(&config.gateway);

        Self {
            config: config.clone(),
            employees: EmployeeService::new(Arc::new(gateway)),
        }
    }
}

//! Roster Server - read-through facade over the upstream employee API
//!
//! # Architecture overview
//!
//! The server owns no employee data. Every request is served by calling
//! the upstream employee API through [`roster_gateway`] and deriving the
//! response in memory:
//!
//! - **HTTP API** (`api`): typed REST routes and handlers
//! - **Services** (`services`): aggregation logic over the gateway
//! - **Core** (`core`): configuration, state, and the server loop
//!
//! # Module structure
//!
//! ```text
//! roster-server/src/
//! ├── core/          # config, state, server
//! ├── services/      # employee aggregation service
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # logging
//! ```

pub mod api;
pub mod core;
pub mod services;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use services::EmployeeService;
pub use shared::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env, then initialize logging from the environment.
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____             __
   / __ \____  _____/ /____  _____
  / /_/ / __ \/ ___/ __/ _ \/ ___/
 / _, _/ /_/ (__  ) /_/  __/ /
/_/ |_|\____/____/\__/\___/_/
    "#
    );
}

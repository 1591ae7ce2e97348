//! # Runtime Configuration
//!
//! Settings come from the environment with sensible defaults, so the node
//! boots with no configuration at all in development.

use awp_gateway::GatewayConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    Invalid { name: String, value: String },
}

/// Top-level node settings.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Label for the entity table.
    pub table_name: String,
    /// Label for the event bus.
    pub event_bus_name: String,
    /// Name of the student search index.
    pub search_index: String,
    /// HTTP gateway settings.
    pub gateway: GatewayConfig,
    /// Seed a couple of demo schools and students on boot.
    pub seed_demo: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            table_name: "awp-entities".to_string(),
            event_bus_name: "awp-events".to_string(),
            search_index: "students".to_string(),
            gateway: GatewayConfig::default(),
            seed_demo: false,
        }
    }
}

impl RuntimeConfig {
    /// Read configuration from `AWP_*` environment variables, falling back
    /// to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(value) = std::env::var("AWP_TABLE_NAME") {
            config.table_name = value;
        }
        if let Ok(value) = std::env::var("AWP_EVENT_BUS_NAME") {
            config.event_bus_name = value;
        }
        if let Ok(value) = std::env::var("AWP_SEARCH_INDEX") {
            config.search_index = value;
        }
        if let Ok(value) = std::env::var("AWP_HTTP_HOST") {
            config.gateway.host = value;
        }
        if let Ok(value) = std::env::var("AWP_HTTP_PORT") {
            config.gateway.port = value.parse().map_err(|_| ConfigError::Invalid {
                name: "AWP_HTTP_PORT".to_string(),
                value,
            })?;
        }
        if let Ok(value) = std::env::var("AWP_SEED_DEMO") {
            config.seed_demo = matches!(value.as_str(), "1" | "true" | "yes");
        }

        Ok(config)
    }
}

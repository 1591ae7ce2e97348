//! Gateway configuration.

use crate::error::GatewayError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// HTTP gateway settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Maximum number of calls accepted in one batch request.
    pub max_batch_size: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            max_batch_size: 50,
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.host.is_empty() {
            return Err(GatewayError::Config("host must not be empty".into()));
        }
        if self.port == 0 {
            return Err(GatewayError::Config("port must not be zero".into()));
        }
        if self.max_batch_size == 0 {
            return Err(GatewayError::Config(
                "max_batch_size must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// The socket address to bind.
    pub fn addr(&self) -> Result<SocketAddr, GatewayError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| GatewayError::Config(format!("invalid listen address: {e}")))
    }
}

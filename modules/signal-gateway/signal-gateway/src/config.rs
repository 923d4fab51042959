use std::time::Duration;

use serde::{Deserialize, Serialize};
use signal_bootstrap::LoggingConfig;

/// Environment prefix for gateway settings, e.g. `SIGNAL_GATEWAY__SERVER_ADDR=responder:10000`.
pub const ENV_PREFIX: &str = "SIGNAL_GATEWAY__";

/// Configuration for the signal gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GatewayConfig {
    /// Responder address, `host:port` or a full `http://` URI.
    pub server_addr: String,
    /// HTTP listen address.
    pub listen_addr: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub logging: LoggingConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server_addr: "localhost:10000".to_owned(),
            listen_addr: "0.0.0.0:8080".to_owned(),
            request_timeout_secs: 10,
            connect_timeout_secs: 10,
            logging: LoggingConfig::default(),
        }
    }
}

impl GatewayConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

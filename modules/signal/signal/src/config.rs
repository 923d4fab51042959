use serde::{Deserialize, Serialize};
use signal_bootstrap::LoggingConfig;

/// Environment prefix for responder settings, e.g. `SIGNAL_RESPONDER__PORT=10001`.
pub const ENV_PREFIX: &str = "SIGNAL_RESPONDER__";

/// Configuration for the signal responder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResponderConfig {
    /// Host or IP the gRPC listener binds to.
    pub host: String,
    pub port: u16,
    pub logging: LoggingConfig,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_owned(),
            port: 10000,
            logging: LoggingConfig::default(),
        }
    }
}

impl ResponderConfig {
    /// `host:port` the listener binds to.
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

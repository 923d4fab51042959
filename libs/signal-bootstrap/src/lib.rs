//! Bootstrap helpers shared by the signal binaries
//!
//! - [`config`]: layered configuration (defaults, YAML, environment)
//! - [`logging`]: `tracing-subscriber` initialization
//! - [`signals`]: Ctrl+C / SIGTERM handling and shutdown tokens

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod config;
pub mod logging;
pub mod signals;

pub use config::{ConfigError, load_config};
pub use logging::{LogFormat, LoggingConfig, init_logging};
pub use signals::{shutdown_token, wait_for_shutdown};

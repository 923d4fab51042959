//! Layered configuration loading.
//!
//! Precedence, lowest to highest:
//! 1. `T::default()`
//! 2. YAML file (when a path is given)
//! 3. Environment variables `<PREFIX><key>`, nested keys separated by `__`
//!
//! CLI overrides are applied by the binary on the returned value.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file does not exist: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

/// Load a configuration struct from defaults, an optional YAML file and the environment.
///
/// # Errors
/// Returns [`ConfigError::MissingFile`] if `path` is given but is not a file, and
/// [`ConfigError::Invalid`] if the merged sources do not deserialize into `T`.
pub fn load_config<T>(path: Option<&Path>, env_prefix: &str) -> Result<T, ConfigError>
where
    T: Serialize + DeserializeOwned + Default,
{
    let mut figment = Figment::new().merge(Serialized::defaults(T::default()));

    if let Some(path) = path {
        if !path.is_file() {
            return Err(ConfigError::MissingFile(path.to_path_buf()));
        }
        tracing::debug!(path = %path.display(), "loading configuration file");
        figment = figment.merge(Yaml::file(path));
    }

    figment = figment.merge(Env::prefixed(env_prefix).split("__"));

    figment.extract().map_err(|e| ConfigError::Invalid(Box::new(e)))
}

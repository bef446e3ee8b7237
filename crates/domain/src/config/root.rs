use super::errors::ConfigError;
use super::{DnsConfig, LoggingConfig, PreloadConfig, ServerConfig};
use crate::tuning::ValidationTuning;
use serde::{Deserialize, Serialize};
use std::env;

/// Command-line overrides applied on top of environment-derived defaults.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub preload_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dns: DnsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub preload: PreloadConfig,
    #[serde(default)]
    pub tuning: ValidationTuning,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            dns: DnsConfig::default(),
            logging: LoggingConfig::default(),
            preload: PreloadConfig::default(),
            tuning: ValidationTuning::default(),
        }
    }
}

impl Config {
    /// Builds a `Config` from environment variables (`SERVER_NAME`,
    /// `MEASUREMENT_MODE`, `BIND_ADDRESS`, `PORT`, `RUST_LOG`,
    /// `QUEUE_PRELOAD_PATH`), then layers CLI overrides on top.
    pub fn load(cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Ok(server_name) = env::var("SERVER_NAME") {
            if !server_name.is_empty() {
                config.server.server_name = server_name;
            }
        }

        if let Ok(measurement_mode) = env::var("MEASUREMENT_MODE") {
            config.server.measurement_mode = is_truthy(&measurement_mode);
        }

        if let Ok(bind) = env::var("BIND_ADDRESS") {
            config.server.bind_address = bind;
        }

        if let Ok(port) = env::var("PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value: port,
                })?;
        }

        if let Ok(path) = env::var("QUEUE_PRELOAD_PATH") {
            config.preload.path = path;
        }

        if let Some(bind) = cli_overrides.bind_address {
            config.server.bind_address = bind;
        }
        if let Some(port) = cli_overrides.port {
            config.server.port = port;
        }
        if let Some(path) = cli_overrides.preload_path {
            config.preload.path = path;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_address.is_empty() {
            return Err(ConfigError::InvalidBindAddress(
                self.server.bind_address.clone(),
            ));
        }
        self.tuning
            .validate()
            .map_err(ConfigError::InvalidTuning)?;
        Ok(())
    }
}

/// Mirrors the source's `bool(os.getenv("MEASUREMENT_MODE")) or False`:
/// any non-empty value enables measurement mode, including the literal
/// string `"false"`. Only an unset or empty var is falsy.
fn is_truthy(value: &str) -> bool {
    !value.is_empty()
}

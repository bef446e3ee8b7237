use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid environment variable {name}: {value}")]
    InvalidEnvVar { name: String, value: String },

    #[error("invalid tuning configuration: {0}")]
    InvalidTuning(String),

    #[error("invalid bind address: {0}")]
    InvalidBindAddress(String),
}

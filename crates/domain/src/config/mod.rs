//! Configuration module for the ADDV coordinator.
//!
//! Mirrors this codebase's usual per-concern layout: one struct per
//! concern, each `serde`-deserializable with `#[serde(default = "...")]`
//! fallbacks, assembled into a root [`Config`] and validated once at
//! startup via [`Config::validate`].

pub mod dns;
pub mod errors;
pub mod logging;
pub mod preload;
pub mod root;
pub mod server;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use preload::PreloadConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;

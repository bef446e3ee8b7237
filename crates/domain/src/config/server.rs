use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Controls the `rep{i}.{server_name}` reporting-subdomain labels.
    /// When `localhost`, all reporting subdomains collapse to `localhost`.
    #[serde(default = "default_server_name")]
    pub server_name: String,

    /// Calibration mode: challenges are the constant `favicon.ico`.
    #[serde(default)]
    pub measurement_mode: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            server_name: default_server_name(),
            measurement_mode: false,
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_server_name() -> String {
    "localhost".to_string()
}

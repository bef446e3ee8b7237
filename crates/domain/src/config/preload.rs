use serde::{Deserialize, Serialize};

/// Startup domain-list preload configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PreloadConfig {
    #[serde(default = "default_preload_path")]
    pub path: String,
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            path: default_preload_path(),
        }
    }
}

fn default_preload_path() -> String {
    "/app/logs/queue-preload.lst".to_string()
}

use serde::{Deserialize, Serialize};

/// DNS oracle configuration — the fixed recursive resolver list.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    #[serde(default = "default_resolvers")]
    pub resolvers: Vec<String>,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            resolvers: default_resolvers(),
        }
    }
}

fn default_resolvers() -> Vec<String> {
    vec![
        "8.8.8.8".to_string(),
        "8.8.4.4".to_string(),
        "9.9.9.9".to_string(),
        "1.1.1.1".to_string(),
        "1.0.0.1".to_string(),
    ]
}

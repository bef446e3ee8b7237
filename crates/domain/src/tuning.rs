use serde::{Deserialize, Serialize};

/// Tuning constants governing assignment, consensus and challenge shape.
/// Mirrors the source's module-level constants, but made overridable so
/// tests can shrink the quorum without touching the production defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationTuning {
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
    #[serde(default = "default_prefix_len")]
    pub prefix_len: u8,
    #[serde(default = "default_auth_timeout_secs")]
    pub auth_timeout_secs: i64,
    #[serde(default = "default_min_answers")]
    pub min_answers: usize,
    #[serde(default = "default_n_report_subs")]
    pub n_report_subdomains: usize,
    #[serde(default = "default_min_consensus")]
    pub min_consensus: usize,
    #[serde(default = "default_challenge_len")]
    pub challenge_len: usize,
    #[serde(default = "default_dns_attempts")]
    pub dns_attempts: u32,
}

impl Default for ValidationTuning {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            pool_size: default_pool_size(),
            prefix_len: default_prefix_len(),
            auth_timeout_secs: default_auth_timeout_secs(),
            min_answers: default_min_answers(),
            n_report_subdomains: default_n_report_subs(),
            min_consensus: default_min_consensus(),
            challenge_len: default_challenge_len(),
            dns_attempts: default_dns_attempts(),
        }
    }
}

impl ValidationTuning {
    /// `N_REPORT_SUBS >= ceil(BATCH_SIZE / 6)`, per the source's own comment.
    pub fn validate(&self) -> Result<(), String> {
        let min_report_subs = self.batch_size.div_ceil(6);
        if self.n_report_subdomains < min_report_subs {
            return Err(format!(
                "n_report_subdomains ({}) must be at least ceil(batch_size / 6) = {}",
                self.n_report_subdomains, min_report_subs
            ));
        }
        if self.min_consensus > self.min_answers {
            return Err(format!(
                "min_consensus ({}) cannot exceed min_answers ({})",
                self.min_consensus, self.min_answers
            ));
        }
        Ok(())
    }
}

fn default_batch_size() -> usize {
    20
}
fn default_pool_size() -> usize {
    120
}
fn default_prefix_len() -> u8 {
    16
}
fn default_auth_timeout_secs() -> i64 {
    120
}
fn default_min_answers() -> usize {
    7
}
fn default_n_report_subs() -> usize {
    10
}
fn default_min_consensus() -> usize {
    5
}
fn default_challenge_len() -> usize {
    43
}
fn default_dns_attempts() -> u32 {
    3
}

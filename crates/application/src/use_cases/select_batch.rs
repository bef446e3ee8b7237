use crate::ports::{OptOutLedger, QueueRepository};
use crate::services::KeyedTagger;
use addv_domain::{SubnetKey, ValidationTuning};
use std::sync::Arc;

/// A single decorated assignment handed back to the HTTP layer to embed
/// in the validator page.
#[derive(Debug, Clone)]
pub struct AssignedChallenge {
    pub domain: String,
    pub challenge: String,
    pub tag: String,
    pub reporting_subdomain: String,
}

/// Selects a batch of (domain, challenge) pairs the reporter has not
/// already answered, then decorates each with an authentication tag and
/// a reporting subdomain.
pub struct SelectBatchUseCase {
    queue: Arc<dyn QueueRepository>,
    opt_out: Arc<dyn OptOutLedger>,
    tagger: Arc<KeyedTagger>,
    tuning: ValidationTuning,
    server_name: String,
}

impl SelectBatchUseCase {
    pub fn new(
        queue: Arc<dyn QueueRepository>,
        opt_out: Arc<dyn OptOutLedger>,
        tagger: Arc<KeyedTagger>,
        tuning: ValidationTuning,
        server_name: String,
    ) -> Self {
        Self {
            queue,
            opt_out,
            tagger,
            tuning,
            server_name,
        }
    }

    /// `issued_at` is the assignment-wide Unix second, identical across
    /// the whole returned batch.
    pub fn execute(&self, reporter_ip: &str, issued_at: i64) -> Vec<AssignedChallenge> {
        let subnet = match SubnetKey::of(reporter_ip, self.tuning.prefix_len) {
            Ok(s) => s,
            Err(_) => return Vec::new(),
        };

        if self.opt_out.is_opted_out(&subnet) {
            return Vec::new();
        }

        let mut pool = self.queue.snapshot_keys(self.tuning.pool_size);
        fastrand::shuffle(&mut pool);

        let mut selected = Vec::with_capacity(self.tuning.batch_size.min(pool.len()));
        for domain in pool {
            if selected.len() >= self.tuning.batch_size {
                break;
            }
            if let Some(entry) = self.queue.peek(&domain) {
                if !entry.answers.contains_key(&subnet) {
                    selected.push((domain, entry.challenge));
                }
            }
        }

        let issued_at_str = issued_at.to_string();
        let n = self.tuning.n_report_subdomains;
        selected
            .into_iter()
            .enumerate()
            .map(|(i, (domain, challenge))| {
                let tag = self.tagger.tag(&[&domain, reporter_ip, &issued_at_str]);
                let reporting_subdomain = if self.server_name == "localhost" {
                    "localhost".to_string()
                } else {
                    format!("rep{}.{}", i % n, self.server_name)
                };
                AssignedChallenge {
                    domain,
                    challenge,
                    tag,
                    reporting_subdomain,
                }
            })
            .collect()
    }
}

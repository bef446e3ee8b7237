use crate::use_cases::queue_domain::{QueueDomainUseCase, QueueOutcome};
use std::collections::HashSet;
use std::sync::Arc;

/// Applies [`QueueDomainUseCase`] to a set of domains, concatenating
/// per-domain outcome lines in the order the set yields them.
pub struct QueueBatchUseCase {
    queue_domain: Arc<QueueDomainUseCase>,
}

impl QueueBatchUseCase {
    pub fn new(queue_domain: Arc<QueueDomainUseCase>) -> Self {
        Self { queue_domain }
    }

    pub async fn execute(&self, domains: HashSet<String>) -> String {
        let mut body = String::new();
        for domain in domains {
            let line = match self.queue_domain.execute(&domain).await {
                QueueOutcome::Queued => "OK\n",
                QueueOutcome::AlreadyQueued => "ALREADY QUEUED\n",
                QueueOutcome::Invalid => "ERROR\n",
            };
            body.push_str(line);
        }
        body
    }
}

use crate::ports::{DnsOracle, EventSink, QueueRepository};
use crate::services::ChallengeGenerator;
use addv_domain::{validation::validate_domain, QueueEntry};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueOutcome {
    Queued,
    AlreadyQueued,
    Invalid,
}

/// Queues a single domain: validates, checks for a pre-existing entry,
/// resolves its A records, and inserts a fresh [`QueueEntry`].
pub struct QueueDomainUseCase {
    queue: Arc<dyn QueueRepository>,
    dns: Arc<dyn DnsOracle>,
    challenges: Arc<ChallengeGenerator>,
    events: Arc<dyn EventSink>,
}

impl QueueDomainUseCase {
    pub fn new(
        queue: Arc<dyn QueueRepository>,
        dns: Arc<dyn DnsOracle>,
        challenges: Arc<ChallengeGenerator>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            queue,
            dns,
            challenges,
            events,
        }
    }

    pub async fn execute(&self, raw_domain: &str) -> QueueOutcome {
        let domain = match validate_domain(raw_domain) {
            Ok(d) => d,
            Err(_) => return QueueOutcome::Invalid,
        };

        if self.queue.exists(&domain) {
            return QueueOutcome::AlreadyQueued;
        }

        let ips = self.dns.ips_of(&domain).await;
        let challenge = self.challenges.generate();
        let entry = QueueEntry::new(challenge.clone(), ips.clone());

        if self.queue.insert_if_absent(domain.clone(), entry) {
            self.events.queued(&domain, &challenge, &ips).await;
            QueueOutcome::Queued
        } else {
            // Lost the race against a concurrent insert for the same domain.
            QueueOutcome::AlreadyQueued
        }
    }
}

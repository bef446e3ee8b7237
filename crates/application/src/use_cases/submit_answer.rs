use crate::ports::{EventSink, QueueRepository, UpdateAction, UpdateOutcome};
use crate::services::KeyedTagger;
use addv_domain::{Answer, SubnetKey, ValidationEvent, ValidationTuning};
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Always returned on the happy *and* the silently-ignored paths
    /// (unknown domain, duplicate subnet) — the response to the reporter
    /// is OK either way, so its work is never visibly wasted.
    Accepted,
    /// Tag mismatch or expired assignment.
    Rejected,
}

/// Verifies an authenticated answer, records it, and on reaching quorum
/// removes the entry and emits the terminal verdict.
pub struct SubmitAnswerUseCase {
    queue: Arc<dyn QueueRepository>,
    tagger: Arc<KeyedTagger>,
    tuning: ValidationTuning,
    events: Arc<dyn EventSink>,
}

impl SubmitAnswerUseCase {
    pub fn new(
        queue: Arc<dyn QueueRepository>,
        tagger: Arc<KeyedTagger>,
        tuning: ValidationTuning,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            queue,
            tagger,
            tuning,
            events,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn execute(
        &self,
        domain: &str,
        reporter_ip: &str,
        issued_at: i64,
        tag: &str,
        outcome: &str,
        reported_at_millis: i64,
        join_key: &str,
    ) -> SubmitOutcome {
        let expected = self.tagger.tag(&[domain, reporter_ip, &issued_at.to_string()]);
        if expected != tag {
            return SubmitOutcome::Rejected;
        }
        if Utc::now().timestamp() >= issued_at + self.tuning.auth_timeout_secs {
            return SubmitOutcome::Rejected;
        }

        let subnet = match SubnetKey::of(reporter_ip, self.tuning.prefix_len) {
            Ok(s) => s,
            Err(_) => return SubmitOutcome::Rejected,
        };

        let reported_at = DateTime::<Utc>::from_timestamp_millis(reported_at_millis)
            .unwrap_or_else(Utc::now);
        let answer = Answer {
            outcome: outcome.to_string(),
            reported_at,
        };
        let min_answers = self.tuning.min_answers;
        let min_consensus = self.tuning.min_consensus;
        let subnet_for_insert = subnet.clone();

        let result = self.queue.update_with(
            domain,
            Box::new(move |entry| {
                if entry.answers.contains_key(&subnet) {
                    return UpdateAction::NoOp;
                }
                entry.answers.insert(subnet_for_insert, answer);
                if entry.answers.len() >= min_answers {
                    UpdateAction::Delete
                } else {
                    UpdateAction::Keep
                }
            }),
        );

        match result {
            UpdateOutcome::NotFound | UpdateOutcome::NoOp => {}
            UpdateOutcome::Kept => {
                self.events.answered(reporter_ip, join_key, domain, outcome).await;
            }
            UpdateOutcome::Removed(entry) => {
                self.events.answered(reporter_ip, join_key, domain, outcome).await;
                let event = ValidationEvent::from_entry(domain.to_string(), entry, min_consensus);
                self.events.verdict(&event).await;
            }
        }

        SubmitOutcome::Accepted
    }
}

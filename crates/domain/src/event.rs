use crate::queue_entry::{Answer, QueueEntry};
use crate::subnet::SubnetKey;
use std::collections::HashMap;

/// The terminal verdict emitted exactly once per domain, when the consensus
/// engine observes the quorum-th answer.
#[derive(Debug, Clone)]
pub enum ValidationEvent {
    Validated {
        domain: String,
        ips: Vec<String>,
        challenge: String,
        answers: HashMap<SubnetKey, Answer>,
    },
    Invalidated {
        domain: String,
        ips: Vec<String>,
        challenge: String,
        answers: HashMap<SubnetKey, Answer>,
    },
}

impl ValidationEvent {
    /// Builds the terminal verdict for an entry that just reached quorum.
    pub fn from_entry(domain: String, entry: QueueEntry, min_consensus: usize) -> Self {
        let successes = entry.success_count();
        let QueueEntry {
            ips,
            challenge,
            answers,
            ..
        } = entry;

        if successes >= min_consensus {
            ValidationEvent::Validated {
                domain,
                ips,
                challenge,
                answers,
            }
        } else {
            ValidationEvent::Invalidated {
                domain,
                ips,
                challenge,
                answers,
            }
        }
    }

    pub fn event_name(&self) -> &'static str {
        match self {
            ValidationEvent::Validated { .. } => "VALIDATED",
            ValidationEvent::Invalidated { .. } => "INVALIDATED",
        }
    }

    pub fn domain(&self) -> &str {
        match self {
            ValidationEvent::Validated { domain, .. } | ValidationEvent::Invalidated { domain, .. } => domain,
        }
    }
}

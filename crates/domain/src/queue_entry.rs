use crate::subnet::SubnetKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single reporter's outcome for a queued domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub outcome: String,
    pub reported_at: DateTime<Utc>,
}

impl Answer {
    pub fn is_success(&self) -> bool {
        self.outcome == "success"
    }
}

/// Value stored per domain in the queue. Mutated only by the consensus
/// engine's `update_with`; never accessed after removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub queued_at: DateTime<Utc>,
    pub challenge: String,
    pub ips: Vec<String>,
    pub answers: HashMap<SubnetKey, Answer>,
}

impl QueueEntry {
    pub fn new(challenge: String, ips: Vec<String>) -> Self {
        Self {
            queued_at: Utc::now(),
            challenge,
            ips,
            answers: HashMap::new(),
        }
    }

    pub fn success_count(&self) -> usize {
        self.answers.values().filter(|a| a.is_success()).count()
    }
}

use addv_application::ports::{DnsOracle, EventSink};
use addv_application::services::{ChallengeGenerator, KeyedTagger};
use addv_application::use_cases::{
    OptOutUseCase, QueueDomainUseCase, SelectBatchUseCase, SubmitAnswerUseCase,
};
use addv_domain::ValidationEvent;
use addv_infrastructure::{DashSetOptOutLedger, InMemoryQueue};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Resolves every domain to a single fixed IP — no network access in tests.
pub struct FixedDns;

#[async_trait]
impl DnsOracle for FixedDns {
    async fn ips_of(&self, _domain: &str) -> Vec<String> {
        vec!["93.184.216.34".to_string()]
    }
}

/// Records every event in memory so assertions can inspect exactly what
/// was emitted, instead of only the use case's return value.
#[derive(Default)]
pub struct RecordingEvents {
    pub queued: Mutex<Vec<String>>,
    pub joined: Mutex<Vec<String>>,
    pub verdicts: Mutex<Vec<ValidationEvent>>,
}

#[async_trait]
impl EventSink for RecordingEvents {
    async fn queued(&self, domain: &str, _challenge: &str, _ips: &[String]) {
        self.queued.lock().unwrap().push(domain.to_string());
    }
    async fn optout(&self, _ip: &str) {}
    async fn joined(&self, ip: &str, _key: &str, _assigned: &[String]) {
        self.joined.lock().unwrap().push(ip.to_string());
    }
    async fn answered(&self, _ip: &str, _key: &str, _domain: &str, _answer: &str) {}
    async fn verdict(&self, event: &ValidationEvent) {
        self.verdicts.lock().unwrap().push(event.clone());
    }
}

/// A fully wired coordinator, minus the HTTP layer, for exercising use
/// cases directly the way the scenarios in `SPEC_FULL.md` §8 describe them.
pub struct Harness {
    pub queue_domain: Arc<QueueDomainUseCase>,
    pub select_batch: Arc<SelectBatchUseCase>,
    pub submit_answer: Arc<SubmitAnswerUseCase>,
    pub opt_out: Arc<OptOutUseCase>,
    pub events: Arc<RecordingEvents>,
    pub tagger: Arc<KeyedTagger>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_tuning(addv_domain::ValidationTuning::default())
    }

    pub fn with_tuning(tuning: addv_domain::ValidationTuning) -> Self {
        let queue = Arc::new(InMemoryQueue::new());
        let opt_out_ledger = Arc::new(DashSetOptOutLedger::new());
        let events = Arc::new(RecordingEvents::default());
        let challenges = Arc::new(ChallengeGenerator::new(false, tuning.challenge_len));
        let tagger = Arc::new(KeyedTagger::new());

        let queue_domain = Arc::new(QueueDomainUseCase::new(
            queue.clone(),
            Arc::new(FixedDns),
            challenges,
            events.clone(),
        ));
        let select_batch = Arc::new(SelectBatchUseCase::new(
            queue.clone(),
            opt_out_ledger.clone(),
            tagger.clone(),
            tuning.clone(),
            "localhost".to_string(),
        ));
        let submit_answer = Arc::new(SubmitAnswerUseCase::new(
            queue,
            tagger.clone(),
            tuning,
            events.clone(),
        ));
        let opt_out = Arc::new(OptOutUseCase::new(opt_out_ledger, 16, events.clone()));

        Self {
            queue_domain,
            select_batch,
            submit_answer,
            opt_out,
            events,
            tagger,
        }
    }
}

/// Seven distinct reporter IPs, each in its own /16 (`10.0.0.0/16`
/// through `10.6.0.0/16`).
pub fn seven_distinct_reporters() -> Vec<String> {
    (0..7).map(|i| format!("10.{i}.0.5")).collect()
}

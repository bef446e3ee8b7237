use addv_api::AppState;
use addv_application::ports::{DnsOracle, EventSink, OptOutLedger, QueueRepository};
use addv_application::services::{ChallengeGenerator, KeyedTagger};
use addv_application::use_cases::{
    OptOutUseCase, QueueBatchUseCase, QueueDomainUseCase, SelectBatchUseCase, SubmitAnswerUseCase,
};
use addv_domain::Config;
use addv_infrastructure::{DashSetOptOutLedger, EventLogSink, HickoryDnsOracle, InMemoryQueue};
use addv_jobs::PreloadJob;
use std::sync::Arc;

/// Wires every adapter and use case together. This is the one place in
/// the coordinator that knows about every concrete type; everything
/// downstream of it sees only the `addv-application` ports/use cases.
pub struct Container {
    pub queue_domain: Arc<QueueDomainUseCase>,
    pub preload: PreloadJob,
    pub app_state: AppState,
}

impl Container {
    pub fn build(config: &Config, log_dir: impl Into<std::path::PathBuf>) -> anyhow::Result<Self> {
        let queue: Arc<dyn QueueRepository> = Arc::new(InMemoryQueue::new());
        let opt_out_ledger: Arc<dyn OptOutLedger> = Arc::new(DashSetOptOutLedger::new());
        let dns: Arc<dyn DnsOracle> =
            Arc::new(HickoryDnsOracle::new(&config.dns.resolvers, config.tuning.dns_attempts));
        let events: Arc<dyn EventSink> = Arc::new(EventLogSink::open(log_dir)?);
        let challenges = Arc::new(ChallengeGenerator::new(
            config.server.measurement_mode,
            config.tuning.challenge_len,
        ));
        let tagger = Arc::new(KeyedTagger::new());

        let queue_domain = Arc::new(QueueDomainUseCase::new(
            queue.clone(),
            dns,
            challenges,
            events.clone(),
        ));
        let queue_batch = Arc::new(QueueBatchUseCase::new(queue_domain.clone()));
        let select_batch = Arc::new(SelectBatchUseCase::new(
            queue.clone(),
            opt_out_ledger.clone(),
            tagger.clone(),
            config.tuning.clone(),
            config.server.server_name.clone(),
        ));
        let submit_answer = Arc::new(SubmitAnswerUseCase::new(
            queue,
            tagger,
            config.tuning.clone(),
            events.clone(),
        ));
        let opt_out = Arc::new(OptOutUseCase::new(
            opt_out_ledger,
            config.tuning.prefix_len,
            events.clone(),
        ));

        let preload = PreloadJob::new(queue_domain.clone(), num_cpus());

        Ok(Self {
            queue_domain,
            preload,
            app_state: AppState {
                queue_domain: queue_domain.clone(),
                queue_batch,
                select_batch,
                submit_answer,
                opt_out,
                events,
            },
        })
    }
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

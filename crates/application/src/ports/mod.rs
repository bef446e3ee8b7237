pub mod dns_oracle;
pub mod event_sink;
pub mod opt_out_ledger;
pub mod queue_repository;

pub use dns_oracle::DnsOracle;
pub use event_sink::EventSink;
pub use opt_out_ledger::OptOutLedger;
pub use queue_repository::{QueueRepository, UpdateAction, UpdateOutcome};

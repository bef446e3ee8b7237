//! ADDV Infrastructure Layer
//!
//! Concrete adapters for the ports declared in `addv-application`.

pub mod dns;
pub mod logging;
pub mod optout;
pub mod queue;

pub use dns::HickoryDnsOracle;
pub use logging::EventLogSink;
pub use optout::DashSetOptOutLedger;
pub use queue::InMemoryQueue;

pub mod opt_out;
pub mod queue_batch;
pub mod queue_domain;
pub mod select_batch;
pub mod submit_answer;

pub use opt_out::OptOutUseCase;
pub use queue_batch::QueueBatchUseCase;
pub use queue_domain::{QueueDomainUseCase, QueueOutcome};
pub use select_batch::{AssignedChallenge, SelectBatchUseCase};
pub use submit_answer::{SubmitAnswerUseCase, SubmitOutcome};

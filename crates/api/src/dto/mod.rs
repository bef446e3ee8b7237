pub mod answer;
pub mod queue;

pub use answer::AnswerParams;
pub use queue::{QueueBatchRequest, QueueParams};

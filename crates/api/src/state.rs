use addv_application::ports::EventSink;
use addv_application::use_cases::{
    OptOutUseCase, QueueBatchUseCase, QueueDomainUseCase, SelectBatchUseCase, SubmitAnswerUseCase,
};
use std::sync::Arc;

/// Shared application state handed to every handler. Each field is one of
/// the use cases wired together by the `cli` crate's dependency injection
/// module; the HTTP layer itself holds no business logic.
#[derive(Clone)]
pub struct AppState {
    pub queue_domain: Arc<QueueDomainUseCase>,
    pub queue_batch: Arc<QueueBatchUseCase>,
    pub select_batch: Arc<SelectBatchUseCase>,
    pub submit_answer: Arc<SubmitAnswerUseCase>,
    pub opt_out: Arc<OptOutUseCase>,
    pub events: Arc<dyn EventSink>,
}

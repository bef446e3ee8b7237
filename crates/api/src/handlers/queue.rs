use crate::dto::{QueueBatchRequest, QueueParams};
use crate::state::AppState;
use addv_application::use_cases::QueueOutcome;
use axum::extract::{Path, Query, State};
use axum::Json;
use tracing::instrument;

fn outcome_line(outcome: QueueOutcome) -> &'static str {
    match outcome {
        QueueOutcome::Queued => "OK\n",
        QueueOutcome::AlreadyQueued => "ALREADY QUEUED\n",
        QueueOutcome::Invalid => "ERROR\n",
    }
}

#[instrument(skip_all, name = "addv_queue_single", fields(key = %key))]
pub async fn queue_single(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(params): Query<QueueParams>,
) -> &'static str {
    let outcome = state.queue_domain.execute(&params.domain).await;
    outcome_line(outcome)
}

#[instrument(skip_all, name = "addv_queue_batch", fields(key = %key))]
pub async fn queue_batch(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(request): Json<QueueBatchRequest>,
) -> String {
    state.queue_batch.execute(request.domains).await
}

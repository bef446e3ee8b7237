use crate::handlers;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;

/// Builds the full ADDV HTTP surface. `{key}` is opaque to the core: it is
/// echoed into logs/spans but never validated (see `SPEC_FULL.md` §6).
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::health_check))
        .route("/opt-out", get(handlers::opt_out))
        .route("/addv/{key}", get(handlers::banner))
        .route("/addv/{key}/queue-batch", post(handlers::queue_batch))
        .route("/addv/{key}/queue", get(handlers::queue_single))
        .route("/addv/{key}/val/join", get(handlers::join))
        .route("/addv/{key}/val/answer", get(handlers::submit))
        .with_state(state)
}

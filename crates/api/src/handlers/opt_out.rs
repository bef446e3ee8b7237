use crate::net::client_ip;
use crate::state::AppState;
use axum::extract::State;
use axum::http::HeaderMap;
use tracing::instrument;

/// Fire-and-forget: logs the reporter's IP and records its subnet as
/// opted out. The OPTOUT event is logged even when `X-Real-IP` is
/// missing. Always `OK` — there is nothing for the caller to retry.
#[instrument(skip_all, name = "addv_opt_out")]
pub async fn opt_out(State(state): State<AppState>, headers: HeaderMap) -> &'static str {
    state.opt_out.execute(client_ip(&headers)).await;
    "OK\n"
}

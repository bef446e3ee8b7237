use axum::extract::Path;
use tracing::instrument;

#[instrument(skip_all, name = "addv_banner", fields(key = %key))]
pub async fn banner(Path(key): Path<String>) -> &'static str {
    "ADDV Server\n"
}

use addv_api::{create_routes, AppState};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Binds and serves the ADDV HTTP facade until the process is killed.
///
/// The validator join page fetches challenge-reporting subdomains from the
/// browser, so every origin is allowed to reach these routes the same way
/// the source's `flask_cors.CORS(app)` did.
pub async fn serve(bind_address: &str, port: u16, state: AppState) -> anyhow::Result<()> {
    let app = create_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("{bind_address}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "ADDV coordinator listening");

    axum::serve(listener, app).await?;
    Ok(())
}

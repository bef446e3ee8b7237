use addv_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initializes the `tracing` subscriber. `RUST_LOG` overrides
/// `config.logging.level` when set, matching this family's usual
/// precedence for ambient operational logging.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_env_filter(filter)
        .init();

    info!(level = %config.logging.level, "logging initialized");
}

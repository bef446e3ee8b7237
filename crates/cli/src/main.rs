mod bootstrap;
mod di;
mod server;

use addv_domain::CliOverrides;
use clap::Parser;
use di::Container;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "addv-coordinator")]
#[command(version)]
#[command(about = "Coordinator for the distributed domain-validation service (ADDV)")]
struct Cli {
    /// Bind address for the HTTP facade.
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// HTTP port.
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Newline-separated domain list to preload into the queue at startup.
    #[arg(long)]
    preload_path: Option<String>,

    /// Directory for the per-process JSONL event log.
    #[arg(long, default_value = "/app/logs")]
    log_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(CliOverrides {
        bind_address: cli.bind,
        port: cli.port,
        preload_path: cli.preload_path,
    })?;

    bootstrap::init_logging(&config);

    let container = Container::build(&config, cli.log_dir)?;

    info!(path = %config.preload.path, "running startup preload job");
    let queued = container
        .preload
        .run(std::path::Path::new(&config.preload.path))
        .await;
    info!(queued, "preload job finished");

    server::serve(
        &config.server.bind_address,
        config.server.port,
        container.app_state,
    )
    .await
}

use addv_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(cli_overrides)?;

    info!(
        bind_address = %config.server.bind_address,
        port = config.server.port,
        server_name = %config.server.server_name,
        measurement_mode = config.server.measurement_mode,
        "configuration loaded"
    );

    Ok(config)
}

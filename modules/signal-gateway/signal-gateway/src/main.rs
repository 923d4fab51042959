//! Signal gateway binary.
//!
//! Configuration is layered: defaults, then `--config` YAML, then
//! `SIGNAL_GATEWAY__*` environment variables, then CLI flags.

use std::path::PathBuf;

use clap::Parser;
use signal_gateway::GatewayConfig;
use signal_gateway::config::ENV_PREFIX;

/// Signal gateway: REST front for the signal responder
#[derive(Parser)]
#[command(name = "signal-gateway")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server address in the format of host:port (default localhost:10000)
    #[arg(long = "server_addr", alias = "server-addr")]
    server_addr: Option<String>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config: GatewayConfig =
        signal_bootstrap::load_config(cli.config.as_deref(), ENV_PREFIX)?;
    if let Some(server_addr) = cli.server_addr {
        config.server_addr = server_addr;
    }

    signal_bootstrap::init_logging(&config.logging, cli.verbose)?;
    tracing::info!(
        server_addr = %config.server_addr,
        listen_addr = %config.listen_addr,
        "signal gateway starting"
    );

    let cancel = signal_bootstrap::shutdown_token();
    signal_gateway::runner::run(&config, cancel).await?;

    tracing::info!("signal gateway stopped");
    Ok(())
}

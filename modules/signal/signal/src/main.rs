//! Signal responder binary.
//!
//! Configuration is layered: defaults, then `--config` YAML, then
//! `SIGNAL_RESPONDER__*` environment variables, then CLI flags.

use std::path::PathBuf;

use clap::Parser;
use signal::ResponderConfig;
use signal::config::ENV_PREFIX;

/// Signal responder: serves Ping and Echo over gRPC
#[derive(Parser)]
#[command(name = "signal-responder")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// The server port (overrides config; default 10000)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config: ResponderConfig =
        signal_bootstrap::load_config(cli.config.as_deref(), ENV_PREFIX)?;
    if let Some(port) = cli.port {
        config.port = port;
    }

    signal_bootstrap::init_logging(&config.logging, cli.verbose)?;
    tracing::info!(listen_addr = %config.listen_addr(), "signal responder starting");

    let cancel = signal_bootstrap::shutdown_token();
    signal::runner::run(&config, cancel).await?;

    tracing::info!("signal responder stopped");
    Ok(())
}

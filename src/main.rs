use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use geumbok_gateway::api::ApiServer;
use geumbok_gateway::{Config, ResponseMode};

/// Geumbok - chat and voice gateway for the Geumbok assistant
#[derive(Parser)]
#[command(name = "geumbok", version, about)]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "GEUMBOK_PORT", default_value = "8000")]
    port: u16,

    /// Always respond locally, never call the provider
    #[arg(long, env = "GEUMBOK_OFFLINE")]
    offline: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before clap reads env-backed arguments
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "info,geumbok_gateway=info",
        1 => "info,geumbok_gateway=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    tracing::info!(port = cli.port, offline = cli.offline, "starting geumbok gateway");

    let config = Config::load_with_options(cli.offline);

    let server = ApiServer::new(&config, cli.port)?;

    match server.mode() {
        ResponseMode::Online => {
            tracing::info!("geumbok gateway ready (online mode, provider configured)");
        }
        ResponseMode::Offline => {
            tracing::info!("geumbok gateway ready (offline mode, responses computed locally)");
        }
    }

    server.run().await?;

    Ok(())
}

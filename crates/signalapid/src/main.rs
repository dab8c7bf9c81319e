//! signalapid — serves the signal REST API.
//!
//! # Usage
//!
//! ```text
//! signalapid serve --port 8080 --data-dir /var/lib/signalapi
//! signalapid serve --config signalapid.toml --skip-seed
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use signalapid::startup::prepare_store;
use signalapid::{CliOverrides, DaemonConfig};

#[derive(Parser)]
#[command(name = "signalapid", about = "Signal telemetry API daemon")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Seed the store if it is empty, then serve the API.
    Serve {
        /// TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on.
        #[arg(long)]
        port: Option<u16>,

        /// Data directory for the signal database.
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Seed from this CSV instead of the embedded one.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Signals per insert batch while seeding.
        #[arg(long)]
        batch_size: Option<usize>,

        /// Do not seed the store on startup.
        #[arg(long)]
        skip_seed: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,signalapid=debug,signalapi=debug")
            }),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            port,
            data_dir,
            csv,
            batch_size,
            skip_seed,
        } => {
            let config = DaemonConfig::load(config.as_deref())?.with_overrides(CliOverrides {
                port,
                data_dir,
                csv,
                batch_size,
                skip_seed,
            });
            serve(config).await
        }
    }
}

async fn serve(config: DaemonConfig) -> anyhow::Result<()> {
    info!("signal API daemon starting");

    let store = prepare_store(&config)?;
    let router = signalapi_api::build_router(store);
    let addr = config.listen_addr();

    info!(%addr, "API server starting");
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("signal API daemon stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

mod cli;

use crate::cli::CLI;
use clap::Parser;
use shortcut_gateway::{Server, ServerSettings};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = CLI::parse();

    info!(
        listen_addr = %config.addr,
        load_path = ?config.load,
        backup_path = %config.backup.display(),
        "starting shortcut server"
    );

    let settings = ServerSettings::builder()
        .listen_addr(config.addr)
        .load_path(config.load)
        .backup_path(config.backup)
        .build();

    Server::new(settings).run(shutdown_signal()).await?;

    info!("shortcut server exited");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for ctrl-c, shutting down");
    }
}

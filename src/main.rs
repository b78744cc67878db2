use anyhow::Result;
use clap::{Parser, crate_version};
use pv_microinverter::cli::{Args, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .without_time()
        .compact()
        .init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Check(args) => args.run().await?,
        Command::Fetch(args) => args.run().await?,
        Command::Poll(args) => args.run().await?,
    }

    info!("done!");
    Ok(())
}

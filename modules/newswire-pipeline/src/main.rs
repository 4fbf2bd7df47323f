use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use newswire_pipeline::{run_once, FLOW_NAME};

#[derive(Parser)]
#[command(name = "newswire")]
#[command(about = "Run the maritime news pipeline once")]
#[command(version)]
struct Cli {
    /// TOML config file; built-in defaults when omitted
    #[arg(long, env = "NEWSWIRE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("newswire=info".parse()?)
                .add_directive("x_client=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    info!(flow = FLOW_NAME, "Starting");
    let summary = run_once(cli.config.as_deref()).await?;
    info!(
        ingested = summary.ingested,
        stored = summary.stored,
        "Finished"
    );

    Ok(())
}

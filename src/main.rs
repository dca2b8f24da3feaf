use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sitemap_export::cli::progress::BarProgress;
use sitemap_export::cli::{commands, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr below the progress bar, keeping stdout for prompts
    let progress = BarProgress::new();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(progress.log_writer()))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    commands::export(&cli, progress).await?;

    Ok(())
}

// src/main.rs
use anyhow::Result;
use clap::Parser;
use jobcrawl::CrawlerConfig;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "jobcrawl")]
#[command(about = "Crawl Spotify job listings into a classified snapshot")]
struct Cli {
    /// Output file for the crawled snapshot
    #[arg(long, default_value = "final.json")]
    output: PathBuf,

    /// Location filter passed to the search API
    #[arg(long, default_value = "stockholm")]
    locale: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = CrawlerConfig::new()
        .with_locale(cli.locale)
        .with_output_path(cli.output);

    let written = jobcrawl::crawl_to_file(&config).await?;
    info!(
        "Done: {} listings written to {}",
        written,
        config.output_path.display()
    );

    Ok(())
}

// src/lib.rs
use anyhow::Result;

pub mod build_id;
pub mod classify;
pub mod config;
pub mod detail;
pub mod error;
pub mod fetch;
pub mod listing;
pub mod pipeline;

pub use config::CrawlerConfig;
pub use error::FetchError;
pub use fetch::{Fetch, HttpFetcher};
pub use listing::{ContentBlock, JobId, Listing, Requirement};

/// Convenience entry: run a crawl against the configured endpoints and write
/// the output artifact. Returns the number of listings written.
pub async fn crawl_to_file(config: &CrawlerConfig) -> Result<usize> {
    let fetcher = HttpFetcher::new()?;
    let listings = pipeline::run_crawl(&fetcher, config).await?;
    pipeline::write_output(&listings, &config.output_path).await?;
    Ok(listings.len())
}

// src/pipeline.rs
use crate::build_id::resolve_build_id;
use crate::classify::classify;
use crate::config::CrawlerConfig;
use crate::detail::enrich_listing;
use crate::fetch::Fetch;
use crate::listing::{fetch_listings, Listing};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// Run the full crawl: resolve the build id, fetch the listing feed, then
/// enrich and classify each listing in feed order.
///
/// Build-id resolution and the feed fetch are run-fatal. A failure while
/// enriching a single listing only excludes that listing; the accumulator
/// receives successes and keeps going.
pub async fn run_crawl<F: Fetch>(fetcher: &F, config: &CrawlerConfig) -> Result<Vec<Listing>> {
    let build_id = resolve_build_id(fetcher, &config.landing_url)
        .await
        .context("Failed to resolve build id")?;

    let listings = fetch_listings(fetcher, &config.search_url_with_locale())
        .await
        .context("Failed to fetch job listings")?;

    let total = listings.len();
    let mut enriched = Vec::with_capacity(total);
    let mut skipped = 0usize;

    for mut listing in listings {
        match enrich_listing(fetcher, &config.detail_url_template, &build_id, &mut listing).await {
            Ok(()) => {
                classify(&mut listing);
                enriched.push(listing);
            }
            Err(e) => {
                warn!("Skipping listing {}: {}", listing.id, e);
                skipped += 1;
            }
        }
    }

    info!(
        "Crawl complete: {} listings fetched, {} enriched, {} skipped",
        total,
        enriched.len(),
        skipped
    );

    Ok(enriched)
}

/// Write the enriched collection to the output artifact in one shot.
pub async fn write_output(listings: &[Listing], path: &Path) -> Result<()> {
    let encoded = serde_json::to_string(listings).context("Failed to encode output collection")?;
    tokio::fs::write(path, encoded)
        .await
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    info!("Wrote {} listings to {}", listings.len(), path.display());
    Ok(())
}

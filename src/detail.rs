// src/detail.rs
use crate::error::FetchError;
use crate::fetch::Fetch;
use crate::listing::{ContentBlock, Listing};
use serde::Deserialize;
use serde_json::{Map, Value};

const BUILD_ID_TOKEN: &str = "|BUILD_ID|";
const JOB_ID_TOKEN: &str = "|JOB_ID|";

#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    #[serde(rename = "pageProps")]
    page_props: PageProps,
}

#[derive(Debug, Deserialize)]
struct PageProps {
    job: JobPayload,
}

#[derive(Debug, Deserialize)]
struct JobPayload {
    urls: Map<String, Value>,
    content: JobContent,
}

#[derive(Debug, Deserialize)]
struct JobContent {
    lists: Vec<ContentBlock>,
    description: String,
}

/// Template the per-job detail-data URL from the resolved build id.
pub fn detail_url(template: &str, build_id: &str, job_id: &str) -> String {
    template
        .replace(BUILD_ID_TOKEN, build_id)
        .replace(JOB_ID_TOKEN, job_id)
}

/// Fetch the detail payload for one listing and attach `urls`, `headlines`
/// and `description` to it.
///
/// Any failure here (transport, status, decode, unexpected structure) is
/// returned to the caller; the orchestrator skips the listing and moves on,
/// since some listings are known to error on the detail endpoint.
pub async fn enrich_listing<F: Fetch>(
    fetcher: &F,
    template: &str,
    build_id: &str,
    listing: &mut Listing,
) -> Result<(), FetchError> {
    let url = detail_url(template, build_id, &listing.id.to_string());
    let body = fetcher.fetch(&url).await?;
    let job = parse_detail_response(&body, &url)?;

    listing.urls = Some(job.urls);
    listing.headlines = Some(job.content.lists);
    listing.description = Some(job.content.description);
    Ok(())
}

fn parse_detail_response(body: &str, source_url: &str) -> Result<JobPayload, FetchError> {
    let envelope: DetailEnvelope = serde_json::from_str(body)
        .map_err(|e| FetchError::malformed(source_url, format!("detail response: {e}")))?;
    Ok(envelope.page_props.job)
}

// src/build_id.rs
use crate::error::FetchError;
use crate::fetch::Fetch;
use scraper::{Html, Selector};
use tracing::info;

/// Resolve the Next.js build id embedded in the listings landing page.
///
/// The id versions the detail-data URLs and rotates whenever the site is
/// redeployed, so it is re-derived on every run.
pub async fn resolve_build_id<F: Fetch>(fetcher: &F, landing_url: &str) -> Result<String, FetchError> {
    let body = fetcher.fetch(landing_url).await?;
    let build_id = extract_build_id(&body, landing_url)?;
    info!("Resolved build id: {}", build_id);
    Ok(build_id)
}

/// Pull `buildId` out of the server-rendered `__NEXT_DATA__` script element.
pub fn extract_build_id(html: &str, source_url: &str) -> Result<String, FetchError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(r#"[id="__NEXT_DATA__"]"#)
        .map_err(|e| FetchError::malformed(source_url, format!("bad selector: {e}")))?;

    let element = document
        .select(&selector)
        .next()
        .ok_or_else(|| FetchError::BuildIdNotFound {
            url: source_url.to_string(),
        })?;

    let script_text = element.text().collect::<String>();
    let page_state: serde_json::Value = serde_json::from_str(&script_text)
        .map_err(|e| FetchError::malformed(source_url, format!("__NEXT_DATA__ is not JSON: {e}")))?;

    page_state
        .get("buildId")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| FetchError::malformed(source_url, "__NEXT_DATA__ has no buildId field"))
}

// src/listing.rs
use crate::error::FetchError;
use crate::fetch::Fetch;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use tracing::info;

/// Listing identifier as the upstream feed ships it (string or integer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobId {
    Number(u64),
    Text(String),
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobId::Number(n) => write!(f, "{}", n),
            JobId::Text(s) => f.write_str(s),
        }
    }
}

/// A labeled section of a job detail's rich content, e.g. "Who you are".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub text: String,
    pub content: String,
}

/// One job posting flowing through the pipeline.
///
/// `id` and `text` are the contract with the search feed; everything else the
/// feed sends is carried through untouched in `extra`. The optional fields
/// are attached during enrichment and classification and only serialize once
/// populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: JobId,
    pub text: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headlines: Option<Vec<ContentBlock>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement: Option<Requirement>,
}

/// Coarse experience label assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Requirement {
    #[serde(rename = "Experienced")]
    Experienced,
    #[serde(rename = "Not Experienced")]
    NotExperienced,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    result: Vec<Listing>,
}

/// Fetch the search feed and decode the listing collection, in feed order.
pub async fn fetch_listings<F: Fetch>(fetcher: &F, search_url: &str) -> Result<Vec<Listing>, FetchError> {
    let body = fetcher.fetch(search_url).await?;
    let listings = parse_search_response(&body, search_url)?;
    info!("Fetched {} listings", listings.len());
    Ok(listings)
}

pub fn parse_search_response(body: &str, source_url: &str) -> Result<Vec<Listing>, FetchError> {
    let envelope: SearchEnvelope = serde_json::from_str(body)
        .map_err(|e| FetchError::malformed(source_url, format!("search response: {e}")))?;
    Ok(envelope.result)
}

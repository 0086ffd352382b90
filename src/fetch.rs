// src/fetch.rs
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

/// Seam between the pipeline and the network so tests can drive the crawl
/// with canned responses.
#[async_trait]
pub trait Fetch {
    /// One GET, body returned as text. No retries, no caching.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        // The jobs site serves an error page to default library user-agents.
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        info!("GET {}", url);

        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|source| FetchError::Transport {
                    url: url.to_string(),
                    source,
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

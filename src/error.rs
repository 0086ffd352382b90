// src/error.rs
use thiserror::Error;

/// Errors produced while fetching or decoding upstream payloads.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure (DNS, connection refused/reset, timeout)
    #[error("transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Response body could not be read as text
    #[error("failed to decode response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Body was readable but did not carry the expected structure
    #[error("malformed payload from {url}: {reason}")]
    MalformedPayload { url: String, reason: String },

    /// Landing page carried no __NEXT_DATA__ element to read a build id from
    #[error("build id element not found in {url}")]
    BuildIdNotFound { url: String },
}

impl FetchError {
    pub fn malformed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

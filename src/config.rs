// src/config.rs
use std::path::PathBuf;

pub const DEFAULT_LANDING_URL: &str = "https://www.spotifyjobs.com/jobs";
pub const DEFAULT_SEARCH_URL: &str =
    "https://api-dot-new-spotifyjobs-com.nw.r.appspot.com/wp-json/animal/v1/job/search";
pub const DEFAULT_DETAIL_URL_TEMPLATE: &str =
    "https://www.spotifyjobs.com/_next/data/|BUILD_ID|/jobs/|JOB_ID|.json";

/// Crawler endpoints and output location.
///
/// Defaults point at the live Spotify jobs site; tests override the URLs to
/// aim at a local fake server.
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    pub landing_url: String,
    pub search_url: String,
    pub detail_url_template: String,
    pub locale: String,
    pub output_path: PathBuf,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            landing_url: DEFAULT_LANDING_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            detail_url_template: DEFAULT_DETAIL_URL_TEMPLATE.to_string(),
            locale: "stockholm".to_string(),
            output_path: PathBuf::from("final.json"),
        }
    }
}

impl CrawlerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_landing_url(mut self, url: impl Into<String>) -> Self {
        self.landing_url = url.into();
        self
    }

    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    pub fn with_detail_url_template(mut self, template: impl Into<String>) -> Self {
        self.detail_url_template = template.into();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = path;
        self
    }

    /// Full search-API URL with the locale filter applied.
    pub fn search_url_with_locale(&self) -> String {
        format!("{}?l={}", self.search_url, self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_includes_locale() {
        let config = CrawlerConfig::default();
        assert!(config.search_url_with_locale().ends_with("?l=stockholm"));

        let config = CrawlerConfig::new()
            .with_search_url("http://localhost:9999/search")
            .with_locale("london");
        assert_eq!(
            config.search_url_with_locale(),
            "http://localhost:9999/search?l=london"
        );
    }
}

use std::time::Duration;

/// Default endpoint the crawler talks to. Tests point this at a mock server.
pub const DEFAULT_BASE_URL: &str = "https://www.reddit.com";

/// Listing page size; the maximum the listing endpoint serves per request.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Identity and transport settings for the fetch client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Reddit username identifying the operator in the User-Agent header
    pub username: String,

    /// Base URL all request paths are joined against
    pub base_url: String,

    /// Fixed delay between retries of a request whose body failed to decode
    pub retry_delay: Duration,

    /// Maximum number of decode retries per request; `None` retries forever
    pub retry_limit: Option<u32>,
}

impl ClientConfig {
    /// Creates a config for the given username with default transport settings
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            retry_delay: Duration::from_secs(5),
            retry_limit: None,
        }
    }
}

/// Crawl shape settings
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Number of listing items requested per page
    pub page_size: usize,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

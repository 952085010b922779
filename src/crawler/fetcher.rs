//! JSON fetch client
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building an HTTP client with the identifying user agent and a cookie
//!   session carried across calls
//! - GET requests that decode their response body as JSON
//! - Fixed-delay retry when the body fails to decode, a transient condition
//!   the listing service is known to exhibit under load

use crate::config::ClientConfig;
use crate::crawler::progress::retry_countdown;
use crate::CrawlError;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client identified by the operator's username
///
/// # Example
///
/// ```no_run
/// use threadcount::config::ClientConfig;
/// use threadcount::crawler::build_http_client;
///
/// let config = ClientConfig::new("somebody");
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &ClientConfig) -> Result<Client, reqwest::Error> {
    let user_agent = format!("/u/{} running a harmless data-viz bot", config.username);

    Client::builder()
        .user_agent(user_agent)
        .cookie_store(true)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Client for fetching JSON documents from the service
///
/// One instance is shared across the whole run so the session (cookies) is
/// carried from request to request.
pub struct FetchClient {
    client: Client,
    base_url: Url,
    retry_delay: Duration,
    retry_limit: Option<u32>,
}

impl FetchClient {
    pub fn new(config: &ClientConfig) -> crate::Result<Self> {
        let client = build_http_client(config)?;
        let base_url = Url::parse(&config.base_url)?;

        Ok(Self {
            client,
            base_url,
            retry_delay: config.retry_delay,
            retry_limit: config.retry_limit,
        })
    }

    /// Fetches `path` with the given query pairs and decodes the body as JSON
    ///
    /// # Retry behavior
    ///
    /// | Condition | Action |
    /// |-----------|--------|
    /// | Body is not valid JSON | Wait `retry_delay`, reissue the request |
    /// | Non-success HTTP status | Fatal, propagated |
    /// | Transport error | Fatal, propagated |
    ///
    /// Decode retries are unbounded unless the config carries a
    /// `retry_limit`, in which case exhausting it yields
    /// [`CrawlError::RetriesExhausted`].
    pub async fn fetch_json(&self, path: &str, query: &[(&str, String)]) -> crate::Result<Value> {
        let url = self.base_url.join(path)?;
        let mut failed_attempts: u32 = 0;

        loop {
            let response = self
                .client
                .get(url.clone())
                .query(query)
                .send()
                .await
                .map_err(|source| CrawlError::Http {
                    url: url.to_string(),
                    source,
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(CrawlError::Status {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }

            let body = response.text().await.map_err(|source| CrawlError::Http {
                url: url.to_string(),
                source,
            })?;

            match serde_json::from_str(&body) {
                Ok(value) => return Ok(value),
                Err(error) => {
                    failed_attempts += 1;
                    if let Some(limit) = self.retry_limit {
                        if failed_attempts >= limit {
                            return Err(CrawlError::RetriesExhausted {
                                url: url.to_string(),
                                attempts: failed_attempts,
                            });
                        }
                    }

                    tracing::warn!(%url, %error, "response was not valid JSON, retrying");
                    retry_countdown(self.retry_delay).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_client_from_config() {
        let config = ClientConfig::new("somebody");
        assert!(build_http_client(&config).is_ok());
    }

    #[test]
    fn rejects_invalid_base_url() {
        let mut config = ClientConfig::new("somebody");
        config.base_url = "not a url".to_string();
        assert!(FetchClient::new(&config).is_err());
    }

    // Retry and decode behavior is covered by the wiremock integration tests.
}

//! Crawler module for post listing and comment retrieval
//!
//! This module contains the core crawling logic, including:
//! - JSON fetching with decode-failure retry
//! - Cursor-following pagination of the top-posts listing
//! - Comment forest traversal
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod paginator;
mod progress;
mod walker;

pub use coordinator::{Coordinator, CrawlReport};
pub use fetcher::{build_http_client, FetchClient};
pub use paginator::PostPaginator;
pub use walker::walk_comment_forest;

use crate::config::{ClientConfig, CrawlConfig};

/// Runs a complete crawl of `subreddit`'s top posts
///
/// This is the main entry point for a crawl. It will:
/// 1. Build the HTTP client
/// 2. Page through the top-of-all-time listing until enough permalinks
/// 3. Download each post's comment payload
/// 4. Walk every comment tree, tallying words
/// 5. Return the aggregated tally and run statistics
///
/// # Arguments
///
/// * `client_config` - Identity and transport settings
/// * `config` - Crawl shape settings (page size)
/// * `subreddit` - Subreddit name, without the `/r/` prefix
/// * `requested` - Number of top posts to analyze (rounded up to whole pages)
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed; tally and statistics inside
/// * `Err(CrawlError)` - A transport or payload error aborted the crawl
pub async fn crawl(
    client_config: &ClientConfig,
    config: CrawlConfig,
    subreddit: &str,
    requested: usize,
) -> crate::Result<CrawlReport> {
    let coordinator = Coordinator::new(client_config, config)?;
    coordinator.run(subreddit, requested).await
}

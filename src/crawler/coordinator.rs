//! Crawl coordinator - main orchestration logic
//!
//! This module drives the whole pipeline:
//! - Rounding the requested post count up to whole listing pages
//! - Collecting permalinks through the paginator
//! - Fetching each post's comment payload
//! - Dispatching one traversal task per post, awaited before the next
//! - Snapshotting the aggregate results into a report

use crate::config::{ClientConfig, CrawlConfig};
use crate::crawler::progress::make_count_progress;
use crate::crawler::walker::walk_comment_forest;
use crate::crawler::{FetchClient, PostPaginator};
use crate::text::{RunStatistics, WordAggregator, WordTally};
use serde_json::Value;
use std::sync::Arc;

/// Final outcome of a crawl run
#[derive(Debug, Clone)]
pub struct CrawlReport {
    pub stats: RunStatistics,
    pub tally: WordTally,
}

/// Main crawl coordinator
pub struct Coordinator {
    config: CrawlConfig,
    fetch: FetchClient,
    aggregator: Arc<WordAggregator>,
}

impl Coordinator {
    pub fn new(client_config: &ClientConfig, config: CrawlConfig) -> crate::Result<Self> {
        let fetch = FetchClient::new(client_config)?;

        Ok(Self {
            config,
            fetch,
            aggregator: Arc::new(WordAggregator::new()),
        })
    }

    /// Crawls the top posts of `subreddit` and tallies their comments
    ///
    /// `requested` is rounded up to the next whole listing page, matching
    /// the paginator's granularity.
    pub async fn run(&self, subreddit: &str, requested: usize) -> crate::Result<CrawlReport> {
        let target = round_up_to_page(requested, self.config.page_size);
        tracing::info!(subreddit, requested, target, "starting crawl");

        let paginator = PostPaginator::new(&self.fetch, subreddit, self.config.page_size);
        let permalinks = paginator.collect(target).await?;
        tracing::info!("collected {} permalinks", permalinks.len());

        let pb = make_count_progress(permalinks.len() as u64, "downloading posts");
        for permalink in &permalinks {
            self.process_post(permalink).await?;
            pb.inc(1);
        }
        pb.finish_and_clear();

        let (stats, tally) = self.aggregator.snapshot();
        tracing::info!(
            comments = stats.total_comments,
            errors = stats.total_errors,
            words = stats.total_words,
            "crawl complete"
        );

        Ok(CrawlReport { stats, tally })
    }

    /// Fetches one post's payload and walks its comment forest
    ///
    /// The payload is a 2-element array of post metadata and a comment
    /// listing. The traversal runs as its own task, awaited before the next
    /// post starts: at most one traversal is ever in flight. Posts whose
    /// payload carries no comment listing contribute nothing.
    async fn process_post(&self, permalink: &str) -> crate::Result<()> {
        let path = format!("{}.json", permalink);
        let payload = self.fetch.fetch_json(&path, &[]).await?;

        if let Some(children) = comment_children(&payload) {
            let aggregator = Arc::clone(&self.aggregator);
            let handle = tokio::task::spawn_blocking(move || {
                walk_comment_forest(&children, &aggregator);
            });
            handle.await?;
        } else {
            tracing::debug!(permalink, "post payload carried no comment listing");
        }

        Ok(())
    }
}

/// Extracts the top-level comment nodes from a post payload, when present
fn comment_children(payload: &Value) -> Option<Vec<Value>> {
    payload
        .as_array()?
        .get(1)?
        .get("data")?
        .get("children")?
        .as_array()
        .cloned()
}

/// Rounds `requested` up to the next multiple of `page_size`
fn round_up_to_page(requested: usize, page_size: usize) -> usize {
    if page_size == 0 || requested % page_size == 0 {
        return requested;
    }
    requested + page_size - requested % page_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rounds_up_to_whole_pages() {
        assert_eq!(round_up_to_page(1, 100), 100);
        assert_eq!(round_up_to_page(100, 100), 100);
        assert_eq!(round_up_to_page(101, 100), 200);
        assert_eq!(round_up_to_page(250, 100), 300);
        assert_eq!(round_up_to_page(0, 100), 0);
    }

    #[test]
    fn extracts_comment_children_from_payload() {
        let payload = json!([
            {"kind": "Listing", "data": {"children": [{"kind": "t3", "data": {}}]}},
            {"kind": "Listing", "data": {"children": [
                {"kind": "t1", "data": {"body": "hello", "replies": ""}}
            ]}}
        ]);

        let children = comment_children(&payload).unwrap();
        assert_eq!(children.len(), 1);
    }

    #[test]
    fn payload_without_comments_yields_none() {
        assert!(comment_children(&json!([{"kind": "Listing", "data": {}}])).is_none());
        assert!(comment_children(&json!({"not": "an array"})).is_none());
    }
}

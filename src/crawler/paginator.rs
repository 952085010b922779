//! Top-listing pagination
//!
//! The listing endpoint serves ranked posts one page at a time; each page
//! carries an opaque cursor naming the next one. The paginator follows
//! cursors until enough permalinks have been collected.

use crate::crawler::progress::make_count_progress;
use crate::crawler::FetchClient;
use crate::CrawlError;
use serde::Deserialize;

/// One page of the listing endpoint
#[derive(Debug, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub struct ListingData {
    /// Cursor naming the next page; absent when the listing is exhausted
    pub after: Option<String>,

    #[serde(default)]
    pub children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
pub struct ListingChild {
    pub data: PostSummary,
}

#[derive(Debug, Deserialize)]
pub struct PostSummary {
    pub permalink: String,
}

/// Collects post permalinks from a subreddit's top-of-all-time listing
pub struct PostPaginator<'a> {
    fetch: &'a FetchClient,
    subreddit: String,
    page_size: usize,
}

impl<'a> PostPaginator<'a> {
    pub fn new(fetch: &'a FetchClient, subreddit: impl Into<String>, page_size: usize) -> Self {
        Self {
            fetch,
            subreddit: subreddit.into(),
            page_size,
        }
    }

    /// Collects permalinks until at least `min_count` have been seen,
    /// returning exactly `min_count` in listing order
    ///
    /// When the listing runs out of pages first, the short collection is
    /// returned with a warning; an unfilled crawl is more useful than a
    /// stalled one.
    pub async fn collect(&self, min_count: usize) -> crate::Result<Vec<String>> {
        let mut permalinks: Vec<String> = Vec::with_capacity(min_count);
        if min_count == 0 {
            return Ok(permalinks);
        }

        let path = format!("/r/{}/top.json", self.subreddit);
        let mut cursor: Option<String> = None;
        let pb = make_count_progress(min_count as u64, "collecting permalinks");

        loop {
            let mut query = vec![
                ("sort", "top".to_string()),
                ("t", "all".to_string()),
                ("limit", self.page_size.to_string()),
            ];
            if let Some(after) = &cursor {
                query.push(("after", after.clone()));
            }

            let payload = self.fetch.fetch_json(&path, &query).await?;
            let listing: Listing =
                serde_json::from_value(payload).map_err(|error| CrawlError::UnexpectedPayload {
                    url: path.clone(),
                    message: error.to_string(),
                })?;

            let page_len = listing.data.children.len();
            for child in listing.data.children {
                permalinks.push(child.data.permalink);
            }
            pb.set_position(permalinks.len().min(min_count) as u64);

            if permalinks.len() >= min_count {
                break;
            }

            match listing.data.after {
                Some(next) if page_len > 0 => cursor = Some(next),
                _ => {
                    tracing::warn!(
                        collected = permalinks.len(),
                        requested = min_count,
                        "listing exhausted before requested count"
                    );
                    break;
                }
            }
        }

        pb.finish_and_clear();
        permalinks.truncate(min_count);
        Ok(permalinks)
    }
}

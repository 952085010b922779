//! Threadcount: subreddit comment word-frequency crawler
//!
//! This crate crawls a subreddit's top posts and their nested comment trees,
//! tallies how often each word appears across all comment bodies, and reports
//! the result as a frequency table.

pub mod config;
pub mod crawler;
pub mod output;
pub mod text;

use thiserror::Error;

/// Main error type for crawl operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("retry limit reached after {attempts} failed decode attempts for {url}")]
    RetriesExhausted { url: String, attempts: u32 },

    #[error("unexpected payload shape for {url}: {message}")]
    UnexpectedPayload { url: String, message: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("traversal task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// Errors raised while writing run output
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for output operations
pub type OutputResult<T> = std::result::Result<T, OutputError>;

// Re-export commonly used types
pub use config::{ClientConfig, CrawlConfig};
pub use crawler::{crawl, Coordinator, CrawlReport, FetchClient, PostPaginator};
pub use text::{tokenize, RunStatistics, WordAggregator, WordTally};

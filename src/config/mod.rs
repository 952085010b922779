//! Configuration module for Threadcount
//!
//! There is no configuration file: everything the crawler needs arrives as
//! CLI arguments plus the defaults defined here.

mod types;

// Re-export types
pub use types::{ClientConfig, CrawlConfig, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};

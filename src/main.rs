//! Threadcount main entry point
//!
//! This is the command-line interface for the Threadcount subreddit
//! word-frequency crawler.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use threadcount::config::{ClientConfig, CrawlConfig};
use threadcount::crawler::crawl;
use threadcount::output::{print_summary, safe_file_name, write_tally_csv};
use tracing_subscriber::EnvFilter;

/// Threadcount: subreddit comment word-frequency crawler
///
/// Threadcount reads the comments of a subreddit's top posts of all time
/// and collects how often each word is used, writing the result to a CSV
/// frequency table.
#[derive(Parser, Debug)]
#[command(name = "threadcount")]
#[command(version = "1.0.0")]
#[command(about = "Tally word usage across a subreddit's top comment threads", long_about = None)]
struct Cli {
    /// Your reddit username (identifies the crawler to the API)
    #[arg(value_name = "USERNAME")]
    username: String,

    /// Subreddit to gather comments from
    #[arg(value_name = "SUBREDDIT")]
    subreddit: String,

    /// Number of top posts to analyze
    #[arg(value_name = "POSTS", value_parser = clap::value_parser!(u32).range(1..))]
    posts: u32,

    /// Path of the output CSV (a numeric suffix is added when taken)
    #[arg(short, long, default_value = "word_data.csv")]
    output: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("crawling /r/{} for {} posts", cli.subreddit, cli.posts);

    let client_config = ClientConfig::new(&cli.username);
    let report = crawl(
        &client_config,
        CrawlConfig::default(),
        &cli.subreddit,
        cli.posts as usize,
    )
    .await
    .with_context(|| format!("crawl of /r/{} failed", cli.subreddit))?;

    print_summary(&report.stats, &report.tally);

    let out = safe_file_name(&cli.output);
    write_tally_csv(&out, &report.tally)
        .with_context(|| format!("failed to write {}", out.display()))?;

    println!("done, output saved to '{}'", out.display());

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("threadcount=info,warn"),
            1 => EnvFilter::new("threadcount=debug,info"),
            2 => EnvFilter::new("threadcount=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

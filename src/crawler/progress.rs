//! Progress reporting helpers for the crawl loops

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Count-style progress bar (items done out of total) with a label
pub fn make_count_progress(total: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::with_template(
        "{spinner:.green} {msg} {pos}/{len} [{bar:.cyan/blue}] {percent:>3}%",
    )
    .unwrap()
    .progress_chars("█▉▊▋▌▍▎▏  ");
    pb.set_style(style);
    pb.set_message(label.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Sleeps for `delay`, showing a per-second countdown for delays of a second
/// or more so the operator can see the retry is intentional.
pub async fn retry_countdown(delay: Duration) {
    let secs = delay.as_secs();
    if secs == 0 {
        tokio::time::sleep(delay).await;
        return;
    }

    let pb = ProgressBar::new(secs);
    pb.set_style(ProgressStyle::with_template("{spinner:.green} waiting {msg}").unwrap());
    for remaining in (1..=secs).rev() {
        pb.set_message(format!("{}s", remaining));
        tokio::time::sleep(Duration::from_secs(1)).await;
        pb.inc(1);
    }
    pb.finish_and_clear();
}

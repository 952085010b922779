//! End-of-run summary reporting

use crate::text::{RunStatistics, WordTally};

/// Prints the final summary lines to stdout
///
/// The error rate is part of the summary so the operator can judge the
/// quality of the collected data at a glance.
///
/// # Arguments
///
/// * `stats` - Counters collected over the run
/// * `tally` - The final word-frequency mapping
pub fn print_summary(stats: &RunStatistics, tally: &WordTally) {
    println!(
        "total: {} comments, errors: {} ({:.0}% successful)",
        stats.total_comments,
        stats.total_errors,
        stats.success_rate()
    );
    println!("words: {} (unique: {})", stats.total_words, tally.len());
}

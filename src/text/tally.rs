//! Shared word tally and run counters
//!
//! The aggregator is the single shared-mutation point of the pipeline. Every
//! traversal task records comments through it; the tally and the statistics
//! live under one lock so their increments can never drift apart.

use crate::text::tokenize;
use std::collections::HashMap;
use std::sync::Mutex;

/// Word-to-count mapping that preserves first-seen order
///
/// Iteration yields entries in the order words were first recorded, which
/// makes the CSV row order deterministic for a given crawl.
#[derive(Debug, Clone, Default)]
pub struct WordTally {
    counts: HashMap<String, u64>,
    order: Vec<String>,
}

impl WordTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments `word`, creating the entry at 1 when new
    fn bump(&mut self, word: String) {
        match self.counts.get_mut(&word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.clone(), 1);
                self.order.push(word);
            }
        }
    }

    /// Returns the count for `word`, 0 when never seen
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of unique words
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order
            .iter()
            .map(|word| (word.as_str(), self.counts[word]))
    }
}

/// Monotonic counters for one crawl run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStatistics {
    /// Comments processed, including malformed ones
    pub total_comments: u64,

    /// Comments whose body could not be located
    pub total_errors: u64,

    /// Word tokens recorded across all comment bodies
    pub total_words: u64,
}

impl RunStatistics {
    /// Share of comments that yielded a readable body, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_comments == 0 {
            return 100.0;
        }
        (self.total_comments - self.total_errors) as f64 / self.total_comments as f64 * 100.0
    }
}

#[derive(Debug, Default)]
struct AggregatorInner {
    tally: WordTally,
    stats: RunStatistics,
}

/// Thread-safe aggregation point for comment bodies
///
/// `record` is safe to call from any number of concurrent traversal tasks;
/// the whole look-up/create/increment sequence for one comment happens under
/// the lock, so counts are never lost and the statistics always agree with
/// the tally.
#[derive(Debug, Default)]
pub struct WordAggregator {
    inner: Mutex<AggregatorInner>,
}

impl WordAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one comment
    ///
    /// `None` marks a malformed comment: it counts toward `total_comments`
    /// and `total_errors` but contributes no words.
    pub fn record(&self, text: Option<&str>) {
        let mut inner = self.inner.lock().unwrap();
        inner.stats.total_comments += 1;

        match text {
            None => inner.stats.total_errors += 1,
            Some(body) => {
                for word in tokenize(body) {
                    inner.stats.total_words += 1;
                    inner.tally.bump(word);
                }
            }
        }
    }

    /// Clones out the current statistics and tally
    ///
    /// Callers are expected to have joined all traversal tasks first; the
    /// snapshot itself only guarantees a consistent view, not quiescence.
    pub fn snapshot(&self) -> (RunStatistics, WordTally) {
        let inner = self.inner.lock().unwrap();
        (inner.stats, inner.tally.clone())
    }
}

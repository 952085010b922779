//! Text processing: tokenization and word-frequency aggregation
//!
//! This module contains the leaf components of the pipeline:
//! - Splitting comment bodies into lowercase word tokens
//! - Accumulating token counts and run statistics under a shared lock

mod tally;
mod tokenize;

pub use tally::{RunStatistics, WordAggregator, WordTally};
pub use tokenize::{tokenize, Tokens};

//! Output module for run results
//!
//! This module handles:
//! - Serializing the word tally as CSV
//! - Picking a collision-free output file name
//! - Printing the end-of-run summary

mod csv;
pub mod stats;

pub use csv::{safe_file_name, write_tally_csv};
pub use stats::print_summary;

//! # Search Comparator
//!
//! Times a linear scan against a binary scan over randomly generated sorted
//! datasets, reporting single-shot wall-clock measurements for a target known
//! to be present in and a target guaranteed absent from each dataset.
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin search_comparator
//! ```
//!
//! The program prompts once for a comma-separated list of dataset sizes, e.g.
//! `1000, 100000, 1000000`, prints a preview of each sorted dataset and the
//! chosen targets, then prints a timing report for every
//! (algorithm x target-kind) combination.

pub mod cli;
pub mod dataset;
pub mod report;
pub mod search;
pub mod timing;

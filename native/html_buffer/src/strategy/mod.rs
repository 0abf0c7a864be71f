//! Extraction Strategies
//!
//! Drivers built on the single-cursor scanner:
//! - collect: one-shot extraction and collect-all-matches loops
//! - parallel: batch extraction over forked cursors (Rayon)

pub mod collect;
pub mod parallel;

pub use collect::{collect_values, extract};
pub use parallel::extract_parallel;

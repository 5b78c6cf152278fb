//! Diarist Analyze — per-entry analysis and bounded batch execution.
//!
//! The `Analyzer` runs keyword, mood, activity and summary extraction for
//! each record, either through a text-analysis backend or with local
//! heuristics, and drives whole batches with a fixed in-flight limit.

pub mod analyzer;
pub mod extract;
pub mod types;

pub use analyzer::Analyzer;
pub use extract::Strategy;
pub use types::*;

//! Timeline — joins records with analysis results and derives views over
//! the resulting entries: filters, search, statistics and exports.

pub mod aggregator;
pub mod export;
pub mod filter;
pub mod stats;
pub mod types;

pub use aggregator::{build, default_title, long_date, sort_by_date};
pub use export::{from_json, mood_emoji, to_json, to_markdown};
pub use filter::{filter_by_date_range, filter_by_mood_range, search};
pub use stats::{stats, DEFAULT_TOP_LIMIT};
pub use types::*;

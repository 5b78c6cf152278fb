//! Diarist Core — shared record types, configuration and errors.

pub mod config;
pub mod error;
pub mod rank;
pub mod types;

pub use config::{BackendConfig, BackendKind, DiaristConfig, MoodRange};
pub use error::{Error, Result};
pub use rank::rank_by_frequency;
pub use types::{AnalysisResult, Metadata, Record};

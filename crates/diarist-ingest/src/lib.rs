//! Diarist Ingest — entry storage, date resolution, metadata extraction.

pub mod date;
pub mod ingest;
pub mod metadata;
pub mod store;

pub use ingest::{IngestFailure, IngestReport, Ingester};
pub use store::{EntryStore, EntryType, FsStore};

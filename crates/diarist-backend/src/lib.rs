//! Text-analysis backends.
//!
//! Provides the `TextAnalysisBackend` trait and two networked
//! implementations: `RemoteBackend` (API key, OpenAI-compatible chat
//! completions) and `LocalBackend` (local model server). With backend kind
//! `none` no backend is built and extraction stays heuristic.

pub mod backend;
pub mod local;
pub mod remote;
pub mod types;

#[cfg(test)]
mod testing;

pub use backend::TextAnalysisBackend;
pub use local::LocalBackend;
pub use remote::RemoteBackend;

use std::sync::Arc;
use std::time::Duration;

use diarist_core::{BackendConfig, BackendKind, Error, Result};

/// Build the backend selected by `config`, or `None` for heuristic mode.
pub fn create_backend(config: &BackendConfig) -> Result<Option<Arc<dyn TextAnalysisBackend>>> {
    let timeout = Duration::from_secs(config.timeout_secs());

    match config.kind {
        BackendKind::None => {
            tracing::info!("No backend configured. Using heuristic extraction.");
            Ok(None)
        }
        BackendKind::Remote => {
            let api_key = config
                .api_key
                .as_deref()
                .ok_or_else(|| Error::Config("remote backend requires an apiKey".into()))?;
            tracing::info!(
                "Using remote backend {} (model={})",
                config.endpoint(),
                config.model()
            );
            let backend = RemoteBackend::new(config.endpoint(), config.model(), api_key, timeout)?;
            Ok(Some(Arc::new(backend)))
        }
        BackendKind::Local => {
            tracing::info!(
                "Using local backend {} (model={})",
                config.endpoint(),
                config.model()
            );
            let backend = LocalBackend::new(config.endpoint(), config.model(), timeout)?;
            Ok(Some(Arc::new(backend)))
        }
    }
}

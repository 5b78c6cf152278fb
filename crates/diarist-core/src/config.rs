//! Analysis configuration.
//!
//! A [`DiaristConfig`] is built once (from a JSON file, environment and
//! defaults) and handed to each component at construction. Components never
//! mutate it; a settings change means building a new config and new
//! components.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD";
pub const DEFAULT_MAX_KEYWORDS: usize = 5;
pub const DEFAULT_MAX_IN_FLIGHT: usize = 4;
pub const DEFAULT_STATS_LIMIT: usize = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const DEFAULT_REMOTE_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_REMOTE_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_LOCAL_ENDPOINT: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_LOCAL_MODEL: &str = "llama3";

/// Which text-analysis backend drives extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Heuristic extraction only, no network calls.
    #[default]
    None,
    /// Key-authenticated remote chat-completion service.
    Remote,
    /// Local HTTP model server.
    Local,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Remote => write!(f, "remote"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// Backend selection plus its credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackendConfig {
    pub kind: BackendKind,
    pub api_key: Option<String>,
    /// Model name; a per-kind default applies when absent.
    pub model: Option<String>,
    /// Full endpoint URL; a per-kind default applies when absent.
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl BackendConfig {
    pub fn model(&self) -> &str {
        match (&self.model, self.kind) {
            (Some(m), _) => m,
            (None, BackendKind::Local) => DEFAULT_LOCAL_MODEL,
            (None, _) => DEFAULT_REMOTE_MODEL,
        }
    }

    pub fn endpoint(&self) -> &str {
        match (&self.endpoint, self.kind) {
            (Some(e), _) => e,
            (None, BackendKind::Local) => DEFAULT_LOCAL_ENDPOINT,
            (None, _) => DEFAULT_REMOTE_ENDPOINT,
        }
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

/// Inclusive bounds for mood scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 2]", into = "[u8; 2]")]
pub struct MoodRange {
    pub min: u8,
    pub max: u8,
}

impl MoodRange {
    pub fn contains(&self, score: i64) -> bool {
        score >= i64::from(self.min) && score <= i64::from(self.max)
    }
}

impl Default for MoodRange {
    fn default() -> Self {
        Self { min: 1, max: 5 }
    }
}

impl From<[u8; 2]> for MoodRange {
    fn from([min, max]: [u8; 2]) -> Self {
        Self { min, max }
    }
}

impl From<MoodRange> for [u8; 2] {
    fn from(range: MoodRange) -> Self {
        [range.min, range.max]
    }
}

/// Top-level configuration consumed by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiaristConfig {
    /// Moment-style date pattern matched against entry file names.
    pub date_format: String,
    pub max_keywords: usize,
    pub backend: BackendConfig,
    pub mood_range: MoodRange,
    /// User tag vocabulary. Advisory only, no extractor enforces it.
    pub custom_tags: Vec<String>,
    /// Upper bound on concurrently analyzed entries in a batch.
    pub max_in_flight: usize,
    /// Length of the ranked keyword/activity tables in statistics.
    pub stats_limit: usize,
}

impl Default for DiaristConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.into(),
            max_keywords: DEFAULT_MAX_KEYWORDS,
            backend: BackendConfig::default(),
            mood_range: MoodRange::default(),
            custom_tags: Vec::new(),
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
            stats_limit: DEFAULT_STATS_LIMIT,
        }
    }
}

impl DiaristConfig {
    /// Load config from a JSON file, falling back to env vars and defaults.
    ///
    /// A missing file yields the defaults; a present but malformed file is an
    /// error.
    pub fn load(config_path: &Path) -> Result<Self> {
        let mut config = match std::fs::read_to_string(config_path) {
            Ok(s) => {
                debug!("Loading config from {}", config_path.display());
                serde_json::from_str(&s)?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(e.into()),
        };

        // Env vars as fallback for the API key
        if config.backend.api_key.is_none() {
            config.backend.api_key = std::env::var("DIARIST_API_KEY")
                .or_else(|_| std::env::var("OPENAI_API_KEY"))
                .ok();
        }

        config.validate()?;
        info!(
            "Config loaded: backend={}, max_keywords={}, max_in_flight={}",
            config.backend.kind, config.max_keywords, config.max_in_flight
        );
        Ok(config)
    }

    /// Check option values that would otherwise fail deep inside the pipeline.
    pub fn validate(&self) -> Result<()> {
        if self.date_format.trim().is_empty() {
            return Err(Error::Config("dateFormat must not be empty".into()));
        }
        if self.max_keywords == 0 {
            return Err(Error::Config("maxKeywords must be at least 1".into()));
        }
        if self.max_in_flight == 0 {
            return Err(Error::Config("maxInFlight must be at least 1".into()));
        }
        if self.mood_range.min > self.mood_range.max {
            return Err(Error::Config(format!(
                "moodRange [{}, {}] is inverted",
                self.mood_range.min, self.mood_range.max
            )));
        }
        if self.backend.kind == BackendKind::Remote && self.backend.api_key.is_none() {
            return Err(Error::Config(
                "remote backend selected but no apiKey configured".into(),
            ));
        }
        Ok(())
    }

    /// Whether extraction goes through a text-analysis backend.
    pub fn uses_backend(&self) -> bool {
        self.backend.kind != BackendKind::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DiaristConfig::default();
        assert_eq!(config.date_format, "YYYY-MM-DD");
        assert_eq!(config.max_keywords, 5);
        assert_eq!(config.mood_range, MoodRange { min: 1, max: 5 });
        assert!(!config.uses_backend());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: DiaristConfig = serde_json::from_str(
            r#"{"maxKeywords": 3, "moodRange": [0, 10], "backend": {"kind": "local"}}"#,
        )
        .unwrap();
        assert_eq!(config.max_keywords, 3);
        assert_eq!(config.mood_range, MoodRange { min: 0, max: 10 });
        assert_eq!(config.backend.kind, BackendKind::Local);
        assert_eq!(config.backend.endpoint(), DEFAULT_LOCAL_ENDPOINT);
        assert_eq!(config.backend.model(), DEFAULT_LOCAL_MODEL);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = DiaristConfig::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config.max_keywords, DEFAULT_MAX_KEYWORDS);
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(DiaristConfig::load(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = DiaristConfig {
            max_keywords: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.max_keywords = 5;
        config.mood_range = MoodRange { min: 5, max: 1 };
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.mood_range = MoodRange::default();
        config.backend.kind = BackendKind::Remote;
        config.backend.api_key = None;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_mood_range_contains() {
        let range = MoodRange::default();
        assert!(range.contains(1));
        assert!(range.contains(5));
        assert!(!range.contains(0));
        assert!(!range.contains(6));
    }
}

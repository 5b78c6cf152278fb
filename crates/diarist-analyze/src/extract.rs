//! Entry extractors: keywords, mood, activities, summary.
//!
//! Each extractor has a backend-driven variant (prompt + response parsing)
//! and a heuristic variant (frequency counting, dictionaries, rules). The
//! variant is fixed when the extractor is built; there is no per-call
//! fallback from one to the other.

pub mod activities;
pub mod keywords;
pub mod mood;
pub mod summary;

use std::sync::Arc;

use diarist_backend::TextAnalysisBackend;

pub use activities::ActivityExtractor;
pub use keywords::KeywordExtractor;
pub use mood::MoodScorer;
pub use summary::SummaryGenerator;

/// How an extractor produces its output.
#[derive(Clone)]
pub enum Strategy {
    /// Local rules, no network.
    Heuristic,
    /// Prompt a text-analysis backend.
    Backend(Arc<dyn TextAnalysisBackend>),
}

impl Strategy {
    pub fn from_backend(backend: Option<Arc<dyn TextAnalysisBackend>>) -> Self {
        match backend {
            Some(b) => Self::Backend(b),
            None => Self::Heuristic,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Heuristic => "heuristic",
            Self::Backend(b) => b.name(),
        }
    }
}

impl std::fmt::Debug for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Strategy({})", self.name())
    }
}

/// Split a comma-separated backend answer into trimmed, non-empty items.
pub(crate) fn split_list(response: &str) -> Vec<String> {
    response
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Drop repeated items, keeping the first occurrence.
pub(crate) fn dedup_in_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted backends shared by the extractor and analyzer tests.

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use diarist_backend::TextAnalysisBackend;
    use diarist_core::{Error, Result};

    /// Answers each prompt kind with a fixed reply and records every prompt.
    #[derive(Default)]
    pub struct ScriptedBackend {
        pub keywords: String,
        pub mood: String,
        pub activities: String,
        pub summary: String,
        pub prompts: Mutex<Vec<String>>,
        in_flight: AtomicUsize,
        pub max_in_flight: AtomicUsize,
        pub delay: Option<Duration>,
    }

    impl ScriptedBackend {
        pub fn new(keywords: &str, mood: &str, activities: &str, summary: &str) -> Self {
            Self {
                keywords: keywords.into(),
                mood: mood.into(),
                activities: activities.into(),
                summary: summary.into(),
                ..Default::default()
            }
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub fn prompt_count(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TextAnalysisBackend for ScriptedBackend {
        async fn complete(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            let reply = if prompt.contains("keywords") {
                &self.keywords
            } else if prompt.contains("mood") {
                &self.mood
            } else if prompt.contains("activities") {
                &self.activities
            } else {
                &self.summary
            };
            Ok(reply.clone())
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    /// Fails every call, as if the service were down.
    pub struct DownBackend;

    #[async_trait]
    impl TextAnalysisBackend for DownBackend {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            Err(Error::BackendUnavailable("connection refused".into()))
        }

        fn name(&self) -> &str {
            "down"
        }
    }
}

// Public detection façade: hints in, one result out per request

use futures::future::join_all;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::engine::{LanguageIdentifier, ProfileEngine};
use crate::error::{DetectError, Result};
use crate::hints::{self, Hints};
use crate::pool::WorkerPool;
use crate::result::{DetectionResult, Failure, FailureKind};
use crate::task::{DetectionRequest, DetectionTask};

/// Configuration for the detector's worker pool
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Number of worker threads running the engine
    pub workers: usize,
    /// Worker threads are named `{prefix}-{n}`
    pub thread_name_prefix: String,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get().max(1),
            thread_name_prefix: "tongues-worker".to_string(),
        }
    }
}

/// Per-request input flags and human-readable hints; empty strings mean "no hint"
#[derive(Debug, Clone)]
pub struct DetectOptions {
    pub is_plain_text: bool,
    pub language_hint: String,
    pub encoding_hint: String,
    pub tld_hint: String,
    pub http_language_hint: String,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            is_plain_text: true,
            language_hint: String::new(),
            encoding_hint: String::new(),
            tld_hint: String::new(),
            http_language_hint: String::new(),
        }
    }
}

impl DetectOptions {
    pub fn plain_text(mut self, is_plain_text: bool) -> Self {
        self.is_plain_text = is_plain_text;
        self
    }

    pub fn language_hint(mut self, name: impl Into<String>) -> Self {
        self.language_hint = name.into();
        self
    }

    pub fn encoding_hint(mut self, name: impl Into<String>) -> Self {
        self.encoding_hint = name.into();
        self
    }

    pub fn tld_hint(mut self, tld: impl Into<String>) -> Self {
        self.tld_hint = tld.into();
        self
    }

    pub fn http_language_hint(mut self, header: impl Into<String>) -> Self {
        self.http_language_hint = header.into();
        self
    }

    /// Resolve the hint strings into engine hints
    pub fn hints(&self) -> Hints {
        hints::resolve(
            &self.tld_hint,
            &self.http_language_hint,
            &self.language_hint,
            &self.encoding_hint,
        )
    }
}

struct Inner {
    pool: WorkerPool,
    next_id: AtomicU64,
}

/// Asynchronous language detector.
///
/// Cheap to clone; clones share one worker pool, which shuts down when the
/// last handle is dropped.
#[derive(Clone)]
pub struct Detector {
    inner: Arc<Inner>,
}

impl Detector {
    /// Detector backed by the bundled [`ProfileEngine`]
    pub fn new(config: DetectorConfig) -> Result<Self> {
        Self::with_engine(config, Arc::new(ProfileEngine::new()))
    }

    pub fn with_engine(config: DetectorConfig, engine: Arc<dyn LanguageIdentifier>) -> Result<Self> {
        let pool = WorkerPool::new(config.workers, &config.thread_name_prefix, engine)?;
        Ok(Self {
            inner: Arc::new(Inner {
                pool,
                next_id: AtomicU64::new(0),
            }),
        })
    }

    pub fn workers(&self) -> usize {
        self.inner.pool.size()
    }

    /// Identify the language of `text`
    pub async fn detect(&self, text: impl Into<Vec<u8>>, options: &DetectOptions) -> DetectionResult {
        self.detect_with(text, options, |result| result).await
    }

    /// Callback form of [`Detector::detect`]: `on_complete` runs exactly once, on the
    /// task awaiting this future, never on a worker thread
    pub async fn detect_with<F, R>(
        &self,
        text: impl Into<Vec<u8>>,
        options: &DetectOptions,
        on_complete: F,
    ) -> R
    where
        F: FnOnce(DetectionResult) -> R,
    {
        let request = DetectionRequest::new(text, options.is_plain_text, options.hints());
        self.submit(request, on_complete).await
    }

    /// Run a prepared request through the pool and deliver its result
    pub async fn submit<F, R>(&self, request: DetectionRequest, on_complete: F) -> R
    where
        F: FnOnce(DetectionResult) -> R,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(task = id, bytes = request.len, plain_text = request.is_plain_text, "Submitting detection task");

        let receiver = match self.inner.pool.submit(DetectionTask::new(id, request)) {
            Ok(receiver) => receiver,
            Err(e) => {
                warn!(task = id, "Could not schedule detection task: {}", e);
                return on_complete(unavailable(e));
            }
        };

        match receiver.await {
            Ok(task) => task.complete(on_complete),
            Err(_) => {
                error!(task = id, "Detection task lost by its worker");
                on_complete(unavailable(DetectError::WorkerLost))
            }
        }
    }

    /// Detect several texts concurrently; results keep input order
    pub async fn detect_batch<I, T>(&self, texts: I, options: &DetectOptions) -> Vec<DetectionResult>
    where
        I: IntoIterator<Item = T>,
        T: Into<Vec<u8>>,
    {
        let pending: Vec<_> = texts
            .into_iter()
            .map(|text| self.detect(text, options))
            .collect();
        debug!("Detecting batch of {} texts", pending.len());
        join_all(pending).await
    }
}

fn unavailable(error: DetectError) -> DetectionResult {
    DetectionResult::Failure(Failure::new(FailureKind::Unavailable, error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> Detector {
        Detector::new(DetectorConfig {
            workers: 2,
            ..DetectorConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_default_config_has_workers() {
        let config = DetectorConfig::default();
        assert!(config.workers >= 1);
        assert_eq!(config.thread_name_prefix, "tongues-worker");
    }

    #[test]
    fn test_options_builder_resolves_hints() {
        let options = DetectOptions::default()
            .plain_text(false)
            .language_hint("German")
            .encoding_hint("utf-8")
            .tld_hint("de")
            .http_language_hint("de-AT");
        let hints = options.hints();

        assert!(!options.is_plain_text);
        assert_eq!(hints.language_hint, crate::catalog::Language::GERMAN);
        assert_eq!(hints.encoding_hint, crate::catalog::Encoding::UTF8);
        assert_eq!(hints.tld_hint.as_deref(), Some("de"));
        assert_eq!(hints.content_language_hint.as_deref(), Some("de-AT"));
    }

    #[test]
    fn test_zero_workers_is_config_error() {
        let result = Detector::new(DetectorConfig {
            workers: 0,
            ..DetectorConfig::default()
        });
        assert!(matches!(result, Err(DetectError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn test_detect_english() {
        let result = detector()
            .detect("This is a simple test of the language detector.", &DetectOptions::default())
            .await;
        let success = result.success().expect("success");
        assert_eq!(success.primary().unwrap().code, "en");
    }

    #[tokio::test]
    async fn test_callback_fires_once_on_caller_thread() {
        let detector = detector();
        let caller = std::thread::current().id();
        let mut deliveries = 0;

        let code = detector
            .detect_with("Wir sind nicht mit dem Auto gefahren.", &DetectOptions::default(), |result| {
                deliveries += 1;
                assert_eq!(std::thread::current().id(), caller);
                result.success().map(|s| s.primary().unwrap().code.clone())
            })
            .await;

        assert_eq!(deliveries, 1);
        assert_eq!(code.as_deref(), Some("de"));
    }

    #[tokio::test]
    async fn test_batch_keeps_input_order() {
        let texts = vec![
            "The house is on the hill and it was built by his father.",
            "",
            "La casa está en la colina y fue construida por su padre.",
        ];
        let results = detector().detect_batch(texts, &DetectOptions::default()).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].success().unwrap().primary().unwrap().code, "en");
        assert!(!results[1].is_success());
        assert_eq!(results[2].success().unwrap().primary().unwrap().code, "es");
    }
}

pub mod catalog;
pub mod detector;
pub mod engine;
pub mod error;
pub mod format;
pub mod hints;
pub mod pool;
pub mod result;
pub mod task;

// Re-export main types for convenient access
pub use detector::{DetectOptions, Detector, DetectorConfig};
pub use error::DetectError;
pub use hints::Hints;

pub use result::{
    ChunkEntry, DetectionResult, Failure, FailureKind,
    LanguageEntry, Success, UNIDENTIFIED_MESSAGE
};

// Re-export engine seam for custom identification backends
pub use engine::{
    LanguageIdentifier, LanguageSlot, ProfileEngine,
    RawDetectionOutcome, ResultChunk
};

// Process-wide tables exposed to callers at startup
pub use catalog::{detected_languages, encodings, languages, Encoding, Language};

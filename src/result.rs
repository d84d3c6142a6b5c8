// Public result schema delivered to completion callbacks

use serde::Serialize;

/// Message of the single modeled detection failure
pub const UNIDENTIFIED_MESSAGE: &str = "Failed to identify language";

/// One ranked language candidate
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LanguageEntry {
    pub name: String,
    pub code: String,
    pub percent: i32,
    pub score: f64,
}

/// One contiguous byte range with its dominant language
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChunkEntry {
    pub name: String,
    pub code: String,
    pub offset: usize,
    pub bytes: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Success {
    pub reliable: bool,
    pub text_bytes: usize,
    /// 1 to 3 entries in engine ranking order
    pub languages: Vec<LanguageEntry>,
    /// Source order, UNKNOWN chunks removed
    pub chunks: Vec<ChunkEntry>,
}

impl Success {
    /// Top-ranked language entry
    pub fn primary(&self) -> Option<&LanguageEntry> {
        self.languages.first()
    }
}

/// Why a request produced no Success
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureKind {
    /// No candidate survived UNKNOWN filtering
    #[default]
    Unidentified,
    /// The engine panicked while executing
    EngineFault,
    /// The worker pool could not run or return the task
    Unavailable,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub message: String,
    #[serde(skip)]
    pub kind: FailureKind,
}

impl Failure {
    pub fn unidentified() -> Self {
        Self {
            message: UNIDENTIFIED_MESSAGE.to_string(),
            kind: FailureKind::Unidentified,
        }
    }

    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

/// Outcome of one detection request: exactly one of Success or Failure
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum DetectionResult {
    Success(Success),
    Failure(Failure),
}

impl DetectionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, DetectionResult::Success(_))
    }

    pub fn success(&self) -> Option<&Success> {
        match self {
            DetectionResult::Success(success) => Some(success),
            DetectionResult::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            DetectionResult::Success(_) => None,
            DetectionResult::Failure(failure) => Some(failure),
        }
    }

    /// Split into the `(error, result)` pair of a two-slot callback
    pub fn into_callback_args(self) -> (Option<Failure>, Option<Success>) {
        match self {
            DetectionResult::Success(success) => (None, Some(success)),
            DetectionResult::Failure(failure) => (Some(failure), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_success() -> Success {
        Success {
            reliable: true,
            text_bytes: 42,
            languages: vec![LanguageEntry {
                name: "ENGLISH".to_string(),
                code: "en".to_string(),
                percent: 97,
                score: 1024.0,
            }],
            chunks: vec![ChunkEntry {
                name: "ENGLISH".to_string(),
                code: "en".to_string(),
                offset: 0,
                bytes: 48,
            }],
        }
    }

    #[test]
    fn test_success_wire_shape() {
        let json = serde_json::to_value(DetectionResult::Success(sample_success())).unwrap();
        assert_eq!(json["reliable"], true);
        assert_eq!(json["textBytes"], 42);
        assert_eq!(json["languages"][0]["code"], "en");
        assert_eq!(json["chunks"][0]["bytes"], 48);
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_failure_wire_shape() {
        let json = serde_json::to_value(DetectionResult::Failure(Failure::unidentified())).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Failed to identify language" }));
    }

    #[test]
    fn test_primary_of_empty_success_is_none() {
        let mut success = sample_success();
        assert_eq!(success.primary().map(|l| l.code.as_str()), Some("en"));
        success.languages.clear();
        assert!(success.primary().is_none());
    }

    #[test]
    fn test_callback_args_populate_exactly_one_slot() {
        let (err, ok) = DetectionResult::Success(sample_success()).into_callback_args();
        assert!(err.is_none());
        assert_eq!(ok.unwrap().primary().unwrap().code, "en");

        let (err, ok) = DetectionResult::Failure(Failure::unidentified()).into_callback_args();
        assert_eq!(err.unwrap().kind, FailureKind::Unidentified);
        assert!(ok.is_none());
    }
}

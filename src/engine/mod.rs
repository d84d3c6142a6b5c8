// WHY: the statistical detector is a collaborator behind a trait so the task protocol
// and formatter work unchanged against the bundled engine or any replacement

use crate::catalog::Language;
use crate::hints::Hints;

pub mod profile;
pub mod profiles;
pub mod scan;

pub use profile::ProfileEngine;

/// Number of ranked candidates every engine reports
pub const RANKED_SLOTS: usize = 3;

/// One ranked candidate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanguageSlot {
    pub language: Language,
    /// Share of the sampled text, 0-100
    pub percent: i32,
    /// Evidence density normalized per KiB of text
    pub normalized_score: f64,
}

impl LanguageSlot {
    pub const fn unknown() -> Self {
        Self {
            language: Language::UNKNOWN,
            percent: 0,
            normalized_score: 0.0,
        }
    }
}

/// Contiguous byte range of the input tagged with its dominant language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultChunk {
    pub offset: usize,
    pub bytes: usize,
    pub language: Language,
}

/// Raw engine output, consumed only by the task that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct RawDetectionOutcome {
    pub language3: [LanguageSlot; RANKED_SLOTS],
    pub chunks: Vec<ResultChunk>,
    pub text_bytes: usize,
    pub is_reliable: bool,
}

impl RawDetectionOutcome {
    /// All-UNKNOWN outcome for input the engine could not classify
    pub fn unidentified() -> Self {
        Self {
            language3: [LanguageSlot::unknown(); RANKED_SLOTS],
            chunks: Vec::new(),
            text_bytes: 0,
            is_reliable: false,
        }
    }
}

/// Blocking language identification primitive.
///
/// Implementations must be deterministic for identical arguments and must not
/// touch state owned by the caller; `identify` runs on a pool worker thread.
pub trait LanguageIdentifier: Send + Sync {
    /// Classify the first `len` bytes of `bytes`.
    ///
    /// `flags` is an opaque reserved value forwarded unchanged from the request.
    fn identify(
        &self,
        bytes: &[u8],
        len: usize,
        is_plain_text: bool,
        hints: &Hints,
        flags: i32,
    ) -> RawDetectionOutcome;
}

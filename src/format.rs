// Raw engine output to public result schema
// WHY: engine ranking order is authoritative, so formatting only filters and never re-sorts

use crate::catalog::{self, Language};
use crate::engine::{LanguageSlot, RawDetectionOutcome, ResultChunk};
use crate::result::{ChunkEntry, DetectionResult, Failure, LanguageEntry, Success};

// Ids outside the catalog would render as the UNKNOWN name, so they are dropped like UNKNOWN
fn is_reportable(language: Language) -> bool {
    !language.is_unknown() && catalog::language_info(language).is_some()
}

fn language_entry(slot: &LanguageSlot) -> LanguageEntry {
    LanguageEntry {
        name: catalog::language_name(slot.language).to_string(),
        code: catalog::language_code(slot.language).to_string(),
        percent: slot.percent,
        score: slot.normalized_score,
    }
}

fn chunk_entry(chunk: &ResultChunk) -> ChunkEntry {
    ChunkEntry {
        name: catalog::language_name(chunk.language).to_string(),
        code: catalog::language_code(chunk.language).to_string(),
        offset: chunk.offset,
        bytes: chunk.bytes,
    }
}

/// Shape a raw outcome into a Success, or the unidentified Failure when no
/// ranked slot names a language. Chunks are only read on the Success path.
pub fn format(outcome: &RawDetectionOutcome) -> DetectionResult {
    let languages: Vec<LanguageEntry> = outcome
        .language3
        .iter()
        .filter(|slot| is_reportable(slot.language))
        .map(language_entry)
        .collect();

    if languages.is_empty() {
        return DetectionResult::Failure(Failure::unidentified());
    }

    let chunks = outcome
        .chunks
        .iter()
        .filter(|chunk| is_reportable(chunk.language))
        .map(chunk_entry)
        .collect();

    DetectionResult::Success(Success {
        reliable: outcome.is_reliable,
        text_bytes: outcome.text_bytes,
        languages,
        chunks,
    })
}

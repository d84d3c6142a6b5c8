// Reference identification engine: script ranges plus stopword profiles
// WHY: gives the bridge a deterministic, dependency-free engine; heavier statistical engines
// plug in through `LanguageIdentifier`

use std::collections::BTreeMap;
use tracing::trace;

use super::profiles::LATIN_PROFILES;
use super::scan::{self, Script, Segment, Word};
use super::{LanguageIdentifier, LanguageSlot, RawDetectionOutcome, ResultChunk, RANKED_SLOTS};
use crate::catalog::{self, Language};
use crate::hints::Hints;

const STOPWORD_POINTS: u32 = 2;
const DISTINCTIVE_POINTS: u32 = 1;
const PRIOR_POINTS: u32 = 1;

/// Share of sampled bytes the top language needs to be reliable
const RELIABLE_PERCENT: i32 = 70;
/// Evidence points the top language needs to be reliable
const RELIABLE_MIN_EVIDENCE: u32 = 2;

const UKRAINIAN_LETTERS: &[char] = &['і', 'ї', 'є', 'ґ'];
const RUSSIAN_LETTERS: &[char] = &['ы', 'э', 'ъ', 'ё'];

type Points = BTreeMap<Language, u32>;

/// Stopword and script based engine
#[derive(Debug, Clone, Default)]
pub struct ProfileEngine;

impl ProfileEngine {
    pub fn new() -> Self {
        Self
    }
}

/// Per-segment decision
#[derive(Debug, Clone, Copy)]
struct Verdict {
    start: usize,
    end: usize,
    language: Language,
    letter_bytes: usize,
}

fn add(points: &mut Points, language: Language, amount: u32) {
    if amount > 0 {
        *points.entry(language).or_default() += amount;
    }
}

fn score_word(word: &Word, evidence: &mut Points) {
    let chars = word.char_count() as u32;
    match word.script {
        Script::Latin => {
            for profile in LATIN_PROFILES {
                let mut pts = 0;
                if profile.is_stopword(&word.text) {
                    pts += STOPWORD_POINTS;
                }
                if profile.has_distinctive(&word.text) {
                    pts += DISTINCTIVE_POINTS;
                }
                add(evidence, profile.language, pts);
            }
        }
        Script::Cyrillic => {
            let ukrainian = word.text.chars().any(|c| UKRAINIAN_LETTERS.contains(&c));
            let russian = word.text.chars().any(|c| RUSSIAN_LETTERS.contains(&c));
            match (ukrainian, russian) {
                (true, false) => add(evidence, Language::UKRAINIAN, 2),
                (false, true) => add(evidence, Language::RUSSIAN, 2),
                _ => {
                    add(evidence, Language::RUSSIAN, 1);
                    add(evidence, Language::UKRAINIAN, 1);
                }
            }
        }
        Script::Greek => add(evidence, Language::GREEK, 2),
        Script::Arabic => add(evidence, Language::ARABIC, 2),
        Script::Hebrew => add(evidence, Language::HEBREW, 2),
        Script::Devanagari => add(evidence, Language::HINDI, 2),
        Script::Hangul => add(evidence, Language::KOREAN, 2 * chars),
        Script::Kana => add(evidence, Language::JAPANESE, 3 * chars),
        Script::Han => {
            add(evidence, Language::CHINESE, 2 * chars);
            add(evidence, Language::JAPANESE, chars);
        }
        Script::Thai => add(evidence, Language::THAI, 2 * chars),
        Script::Other => {}
    }
}

// Highest total wins; ties go to the lower language id so results stay deterministic
fn winner(points: &Points) -> Option<(Language, u32)> {
    points
        .iter()
        .filter(|(_, p)| **p > 0)
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(l, p)| (*l, *p))
}

fn score_segment(segment: &Segment, priors: &[Language], evidence: &mut Points) -> Language {
    let mut local = Points::new();
    for word in &segment.words {
        score_word(word, &mut local);
    }
    for (language, pts) in &local {
        add(evidence, *language, *pts);
    }

    if !segment.words.is_empty() {
        for language in priors {
            add(&mut local, *language, PRIOR_POINTS);
        }
    }

    winner(&local).map_or(Language::UNKNOWN, |(language, _)| language)
}

fn tld_language(tld: &str) -> Language {
    let label = tld.trim().trim_start_matches('.');
    let label = label.rsplit('.').next().unwrap_or(label).to_ascii_lowercase();
    let code = match label.as_str() {
        "uk" | "us" | "au" | "nz" | "ie" => "en",
        "fr" | "be" => "fr",
        "de" | "at" | "ch" => "de",
        "es" | "mx" | "ar" | "cl" | "co" | "pe" => "es",
        "br" | "pt" => "pt",
        "it" => "it",
        "nl" => "nl",
        "se" => "sv",
        "dk" => "da",
        "no" => "no",
        "fi" => "fi",
        "pl" => "pl",
        "cz" => "cs",
        "hu" => "hu",
        "ro" => "ro",
        "tr" => "tr",
        "id" => "id",
        "cat" => "ca",
        "ru" => "ru",
        "ua" => "uk",
        "gr" => "el",
        "il" => "iw",
        "jp" => "ja",
        "kr" => "ko",
        "cn" | "tw" => "zh",
        "th" => "th",
        "in" => "hi",
        "sa" | "eg" => "ar",
        _ => return Language::UNKNOWN,
    };
    catalog::language_from_code(code)
}

// "fr-CA, en;q=0.8" -> [FRENCH, ENGLISH]
fn content_languages(header: &str) -> Vec<Language> {
    header
        .split(',')
        .filter_map(|part| {
            let tag = part.split(';').next()?.trim();
            let primary = tag.split(|c: char| c == '-' || c == '_').next()?;
            let language = catalog::language_from_code(primary);
            (!language.is_unknown()).then_some(language)
        })
        .collect()
}

fn priors_from_hints(hints: &Hints) -> Vec<Language> {
    let mut priors = Vec::new();
    if !hints.language_hint.is_unknown() {
        priors.push(hints.language_hint);
    }
    if let Some(header) = hints.content_language_hint.as_deref() {
        priors.extend(content_languages(header));
    }
    if let Some(tld) = hints.tld_hint.as_deref() {
        let language = tld_language(tld);
        if !language.is_unknown() {
            priors.push(language);
        }
    }
    priors.sort();
    priors.dedup();
    priors
}

// Adjacent same-language segments merge; UNKNOWN segments join the chunk before them
// (or the first chunk when they lead the text)
fn build_chunks(verdicts: &[Verdict], len: usize) -> Vec<ResultChunk> {
    let mut chunks: Vec<ResultChunk> = Vec::new();
    let mut leading_start: Option<usize> = None;

    for verdict in verdicts {
        if verdict.language.is_unknown() {
            match chunks.last_mut() {
                Some(last) => last.bytes = verdict.end - last.offset,
                None => {
                    leading_start.get_or_insert(verdict.start);
                }
            }
            continue;
        }

        match chunks.last_mut() {
            Some(last) if last.language == verdict.language => {
                last.bytes = verdict.end - last.offset;
            }
            _ => {
                let offset = leading_start.take().unwrap_or(verdict.start);
                chunks.push(ResultChunk {
                    offset,
                    bytes: verdict.end - offset,
                    language: verdict.language,
                });
            }
        }
    }

    if chunks.is_empty() && len > 0 {
        chunks.push(ResultChunk {
            offset: 0,
            bytes: len,
            language: Language::UNKNOWN,
        });
    }
    chunks
}

fn rank(
    verdicts: &[Verdict],
    evidence: &Points,
    text_bytes: usize,
) -> ([LanguageSlot; RANKED_SLOTS], bool) {
    let mut attributed: BTreeMap<Language, usize> = BTreeMap::new();
    for verdict in verdicts.iter().filter(|v| !v.language.is_unknown()) {
        *attributed.entry(verdict.language).or_default() += verdict.letter_bytes;
    }

    let evidence_of = |language: &Language| evidence.get(language).copied().unwrap_or(0);
    let mut ranked: Vec<(Language, usize)> = attributed.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| evidence_of(&b.0).cmp(&evidence_of(&a.0)))
            .then_with(|| a.0.cmp(&b.0))
    });

    let mut slots = [LanguageSlot::unknown(); RANKED_SLOTS];
    for (slot, (language, bytes)) in slots.iter_mut().zip(ranked.iter()) {
        let percent = ((bytes * 100 + text_bytes / 2) / text_bytes.max(1)).min(100) as i32;
        let score = evidence_of(language) as f64 * 1024.0 / (*bytes).max(1) as f64;
        *slot = LanguageSlot {
            language: *language,
            percent,
            normalized_score: (score * 10.0).round() / 10.0,
        };
    }

    let top = slots[0];
    let reliable = if top.language.is_unknown() {
        false
    } else {
        let top_evidence = evidence_of(&top.language);
        let rival = evidence
            .iter()
            .filter(|(language, _)| **language != top.language)
            .map(|(_, pts)| *pts)
            .max()
            .unwrap_or(0);
        top.percent >= RELIABLE_PERCENT
            && top_evidence >= RELIABLE_MIN_EVIDENCE
            && top_evidence * 2 >= rival * 3
    };

    (slots, reliable)
}

impl LanguageIdentifier for ProfileEngine {
    fn identify(
        &self,
        bytes: &[u8],
        len: usize,
        is_plain_text: bool,
        hints: &Hints,
        flags: i32,
    ) -> RawDetectionOutcome {
        let len = len.min(bytes.len());
        trace!(len, is_plain_text, flags, "Profile engine invoked");

        let segments = scan::segment(&bytes[..len], is_plain_text);
        let priors = priors_from_hints(hints);

        let mut evidence = Points::new();
        let mut text_bytes = 0usize;
        let verdicts: Vec<Verdict> = segments
            .iter()
            .map(|segment| {
                let letter_bytes = segment.letter_bytes();
                text_bytes += letter_bytes;
                Verdict {
                    start: segment.start,
                    end: segment.end,
                    language: score_segment(segment, &priors, &mut evidence),
                    letter_bytes,
                }
            })
            .collect();

        if text_bytes == 0 {
            return RawDetectionOutcome::unidentified();
        }

        let (language3, is_reliable) = rank(&verdicts, &evidence, text_bytes);
        let chunks = build_chunks(&verdicts, len);

        trace!(
            segments = verdicts.len(),
            chunks = chunks.len(),
            text_bytes,
            is_reliable,
            "Profile engine finished"
        );

        RawDetectionOutcome {
            language3,
            chunks,
            text_bytes,
            is_reliable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identify(text: &str) -> RawDetectionOutcome {
        identify_with(text, &Hints::default())
    }

    fn identify_with(text: &str, hints: &Hints) -> RawDetectionOutcome {
        ProfileEngine::new().identify(text.as_bytes(), text.len(), true, hints, 0)
    }

    #[test]
    fn test_english_sentence() {
        let outcome = identify("Hello world, this is clearly English text used for testing.");
        assert_eq!(outcome.language3[0].language, Language::ENGLISH);
        assert_eq!(outcome.language3[0].percent, 100);
        assert!(outcome.is_reliable);
        assert!(outcome.text_bytes > 0);
    }

    #[test]
    fn test_empty_input_is_unidentified() {
        let outcome = identify("");
        assert_eq!(outcome, RawDetectionOutcome::unidentified());
    }

    #[test]
    fn test_letterless_input_is_unidentified() {
        let outcome = identify("1234 ... !!! 42");
        assert!(outcome.language3.iter().all(|s| s.language.is_unknown()));
        assert!(outcome.chunks.is_empty());
    }

    #[test]
    fn test_unscored_words_give_single_unknown_chunk() {
        let text = "Zxq blorf";
        let outcome = identify(text);
        assert!(outcome.language3.iter().all(|s| s.language.is_unknown()));
        assert_eq!(outcome.chunks.len(), 1);
        assert_eq!(outcome.chunks[0].language, Language::UNKNOWN);
        assert_eq!(outcome.chunks[0].bytes, text.len());
    }

    #[test]
    fn test_language_hint_breaks_ambiguity() {
        let hints = Hints {
            language_hint: Language::FRENCH,
            ..Hints::default()
        };
        let outcome = identify_with("Zxq blorf", &hints);
        assert_eq!(outcome.language3[0].language, Language::FRENCH);
        // A prior alone is never enough evidence to be reliable
        assert!(!outcome.is_reliable);
    }

    #[test]
    fn test_tld_and_content_language_priors() {
        assert_eq!(tld_language("co.uk"), Language::ENGLISH);
        assert_eq!(tld_language(".de"), Language::GERMAN);
        assert_eq!(tld_language("example"), Language::UNKNOWN);
        assert_eq!(
            content_languages("fr-CA, en;q=0.8, xx"),
            vec![Language::FRENCH, Language::ENGLISH]
        );
    }

    #[test]
    fn test_mixed_text_chunks_follow_source_order() {
        let french = "Le chat est sur la table et il dort dans la cuisine. Nous avons une maison avec un jardin pour les enfants.";
        let german = "Der Hund ist nicht mit der Katze im Haus. Wir haben einen Garten und die Kinder spielen auf dem Rasen.";
        let text = format!("{french}\n\n{german}");
        let outcome = identify(&text);

        assert_eq!(outcome.chunks.len(), 2);
        assert_eq!(outcome.chunks[0].language, Language::FRENCH);
        assert_eq!(outcome.chunks[1].language, Language::GERMAN);
        assert_eq!(outcome.chunks[0].offset, 0);
        assert_eq!(
            outcome.chunks[0].offset + outcome.chunks[0].bytes,
            outcome.chunks[1].offset
        );
        assert_eq!(outcome.chunks[1].offset + outcome.chunks[1].bytes, text.len());

        let ranked: Vec<Language> = outcome.language3.iter().map(|s| s.language).collect();
        assert!(ranked.contains(&Language::FRENCH));
        assert!(ranked.contains(&Language::GERMAN));
        assert!(outcome.language3[2].language.is_unknown());
    }

    #[test]
    fn test_non_latin_scripts() {
        assert_eq!(identify("Это очень хорошая книга.").language3[0].language, Language::RUSSIAN);
        assert_eq!(identify("Це дуже гарна книга, її всі читають.").language3[0].language, Language::UKRAINIAN);
        assert_eq!(identify("Καλημέρα σε όλους").language3[0].language, Language::GREEK);
        assert_eq!(identify("これは日本語の文章です。").language3[0].language, Language::JAPANESE);
        assert_eq!(identify("这是一个中文句子。").language3[0].language, Language::CHINESE);
        assert_eq!(identify("한국어 문장입니다").language3[0].language, Language::KOREAN);
    }

    #[test]
    fn test_len_limits_scanned_bytes() {
        let text = "the cat and the dog. Der Hund und die Katze.";
        let english_only = "the cat and the dog.".len();
        let outcome =
            ProfileEngine::new().identify(text.as_bytes(), english_only, true, &Hints::default(), 0);
        assert_eq!(outcome.language3[0].language, Language::ENGLISH);
        assert!(outcome.language3[1].language.is_unknown());
        assert_eq!(outcome.chunks.last().unwrap().offset + outcome.chunks.last().unwrap().bytes, english_only);
    }

    #[test]
    fn test_identical_input_is_deterministic() {
        let text = "Il gatto è sotto il tavolo e non vuole uscire per la pioggia.";
        assert_eq!(identify(text), identify(text));
    }
}

// Process-wide language and encoding tables
// WHY: every lookup on the detection path reads these tables, so they are built once and never mutated

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Engine-level language identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language(pub u16);

impl Language {
    pub const ENGLISH: Language = Language(0);
    pub const DANISH: Language = Language(1);
    pub const DUTCH: Language = Language(2);
    pub const FINNISH: Language = Language(3);
    pub const FRENCH: Language = Language(4);
    pub const GERMAN: Language = Language(5);
    pub const HEBREW: Language = Language(6);
    pub const ITALIAN: Language = Language(7);
    pub const JAPANESE: Language = Language(8);
    pub const KOREAN: Language = Language(9);
    pub const NORWEGIAN: Language = Language(10);
    pub const POLISH: Language = Language(11);
    pub const PORTUGUESE: Language = Language(12);
    pub const RUSSIAN: Language = Language(13);
    pub const SPANISH: Language = Language(14);
    pub const SWEDISH: Language = Language(15);
    pub const CHINESE: Language = Language(16);
    pub const CZECH: Language = Language(17);
    pub const GREEK: Language = Language(18);
    pub const ROMANIAN: Language = Language(22);
    pub const HUNGARIAN: Language = Language(23);
    /// Sentinel for "no applicable classification"
    pub const UNKNOWN: Language = Language(26);
    pub const TURKISH: Language = Language(33);
    pub const UKRAINIAN: Language = Language(34);
    pub const HINDI: Language = Language(35);
    pub const INDONESIAN: Language = Language(38);
    pub const THAI: Language = Language(53);
    pub const ARABIC: Language = Language(54);
    pub const CATALAN: Language = Language(55);

    pub fn is_unknown(self) -> bool {
        self == Language::UNKNOWN
    }

    /// Human-readable catalog name
    pub fn name(self) -> &'static str {
        language_name(self)
    }

    /// Short ISO-style code
    pub fn code(self) -> &'static str {
        language_code(self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Engine-level text encoding identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Encoding(pub u16);

impl Encoding {
    pub const ISO_8859_1: Encoding = Encoding(0);
    pub const UTF8: Encoding = Encoding(22);
    /// Sentinel for "no encoding hint"
    pub const UNKNOWN_ENCODING: Encoding = Encoding(23);
    pub const ASCII_7BIT: Encoding = Encoding(24);

    pub fn is_unknown(self) -> bool {
        self == Encoding::UNKNOWN_ENCODING
    }

    pub fn name(self) -> &'static str {
        encoding_name(self)
    }
}

/// One row of the language table
#[derive(Debug, Clone, Copy)]
pub struct LanguageInfo {
    pub language: Language,
    pub name: &'static str,
    pub code: &'static str,
    /// Whether the bundled engine can report this language
    pub detectable: bool,
}

const fn lang(id: u16, name: &'static str, code: &'static str, detectable: bool) -> LanguageInfo {
    LanguageInfo {
        language: Language(id),
        name,
        code,
        detectable,
    }
}

static LANGUAGE_TABLE: &[LanguageInfo] = &[
    lang(0, "ENGLISH", "en", true),
    lang(1, "DANISH", "da", true),
    lang(2, "DUTCH", "nl", true),
    lang(3, "FINNISH", "fi", true),
    lang(4, "FRENCH", "fr", true),
    lang(5, "GERMAN", "de", true),
    lang(6, "HEBREW", "iw", true),
    lang(7, "ITALIAN", "it", true),
    lang(8, "JAPANESE", "ja", true),
    lang(9, "KOREAN", "ko", true),
    lang(10, "NORWEGIAN", "no", true),
    lang(11, "POLISH", "pl", true),
    lang(12, "PORTUGUESE", "pt", true),
    lang(13, "RUSSIAN", "ru", true),
    lang(14, "SPANISH", "es", true),
    lang(15, "SWEDISH", "sv", true),
    lang(16, "CHINESE", "zh", true),
    lang(17, "CZECH", "cs", true),
    lang(18, "GREEK", "el", true),
    lang(19, "ICELANDIC", "is", false),
    lang(20, "LATVIAN", "lv", false),
    lang(21, "LITHUANIAN", "lt", false),
    lang(22, "ROMANIAN", "ro", true),
    lang(23, "HUNGARIAN", "hu", true),
    lang(24, "ESTONIAN", "et", false),
    lang(26, "UNKNOWN", "un", false),
    lang(27, "BULGARIAN", "bg", false),
    lang(28, "CROATIAN", "hr", false),
    lang(29, "SERBIAN", "sr", false),
    lang(30, "IRISH", "ga", false),
    lang(31, "GALICIAN", "gl", false),
    lang(32, "TAGALOG", "tl", false),
    lang(33, "TURKISH", "tr", true),
    lang(34, "UKRAINIAN", "uk", true),
    lang(35, "HINDI", "hi", true),
    lang(36, "MACEDONIAN", "mk", false),
    lang(37, "BENGALI", "bn", false),
    lang(38, "INDONESIAN", "id", true),
    lang(39, "LATIN", "la", false),
    lang(40, "MALAY", "ms", false),
    lang(41, "MALAYALAM", "ml", false),
    lang(42, "WELSH", "cy", false),
    lang(43, "NEPALI", "ne", false),
    lang(44, "TELUGU", "te", false),
    lang(45, "ALBANIAN", "sq", false),
    lang(46, "TAMIL", "ta", false),
    lang(47, "BELARUSIAN", "be", false),
    lang(48, "JAVANESE", "jw", false),
    lang(49, "OCCITAN", "oc", false),
    lang(50, "URDU", "ur", false),
    lang(51, "BIHARI", "bh", false),
    lang(52, "GUJARATI", "gu", false),
    lang(53, "THAI", "th", true),
    lang(54, "ARABIC", "ar", true),
    lang(55, "CATALAN", "ca", true),
    lang(56, "ESPERANTO", "eo", false),
    lang(57, "BASQUE", "eu", false),
    lang(58, "INTERLINGUA", "ia", false),
    lang(59, "KANNADA", "kn", false),
    lang(60, "PUNJABI", "pa", false),
    lang(61, "SCOTS_GAELIC", "gd", false),
    lang(62, "SWAHILI", "sw", false),
    lang(63, "SLOVENIAN", "sl", false),
    lang(64, "MARATHI", "mr", false),
    lang(65, "MALTESE", "mt", false),
    lang(66, "VIETNAMESE", "vi", false),
    lang(67, "FRISIAN", "fy", false),
    lang(68, "SLOVAK", "sk", false),
    lang(69, "ChineseT", "zh-Hant", false),
    lang(70, "FAROESE", "fo", false),
    lang(71, "SUNDANESE", "su", false),
    lang(72, "UZBEK", "uz", false),
    lang(73, "AMHARIC", "am", false),
    lang(74, "AZERBAIJANI", "az", false),
    lang(75, "GEORGIAN", "ka", false),
    lang(76, "TIGRINYA", "ti", false),
    lang(77, "PERSIAN", "fa", false),
];

// Index in this table is the encoding id
static ENCODING_TABLE: &[&str] = &[
    "ISO_8859_1",
    "ISO_8859_2",
    "ISO_8859_3",
    "ISO_8859_4",
    "ISO_8859_5",
    "ISO_8859_6",
    "ISO_8859_7",
    "ISO_8859_8",
    "ISO_8859_9",
    "ISO_8859_10",
    "JAPANESE_EUC_JP",
    "JAPANESE_SHIFT_JIS",
    "JAPANESE_JIS",
    "CHINESE_BIG5",
    "CHINESE_GB",
    "CHINESE_EUC_CN",
    "KOREAN_EUC_KR",
    "UNICODE",
    "CHINESE_EUC_DEC",
    "CHINESE_CNS",
    "CHINESE_BIG5_CP950",
    "JAPANESE_CP932",
    "UTF8",
    "UNKNOWN_ENCODING",
    "ASCII_7BIT",
    "RUSSIAN_KOI8_R",
    "RUSSIAN_CP1251",
    "MSFT_CP1252",
    "RUSSIAN_KOI8_RU",
    "MSFT_CP1250",
    "ISO_8859_15",
    "MSFT_CP1254",
    "MSFT_CP1257",
    "ISO_8859_11",
    "MSFT_CP874",
    "MSFT_CP1256",
    "MSFT_CP1255",
    "ISO_8859_8_I",
    "HEBREW_VISUAL",
    "CZECH_CP852",
    "CZECH_CSN_369103",
    "MSFT_CP1253",
    "RUSSIAN_CP866",
    "ISO_8859_13",
    "ISO_2022_KR",
    "GBK",
    "GB18030",
    "BIG5_HKSCS",
    "ISO_2022_CN",
    "TSCII",
    "TAMIL_MONO",
    "TAMIL_BI",
    "JAGRAN",
    "MACINTOSH_ROMAN",
    "UTF7",
    "BHASKAR",
    "HTCHANAKYA",
    "UTF16BE",
    "UTF16LE",
    "UTF32BE",
    "UTF32LE",
    "BINARYENC",
    "HZ_GB_2312",
    "UTF8UTF8",
    "TAM_ELANGO",
    "TAM_LTTMBARANI",
    "TAM_SHREE",
    "TAM_TBOOMIS",
    "TAM_TMNEWS",
    "TAM_WEBTAMIL",
    "KDDI_SHIFT_JIS",
    "DOCOMO_SHIFT_JIS",
    "SOFTBANK_SHIFT_JIS",
    "KDDI_ISO_2022_JP",
    "SOFTBANK_ISO_2022_JP",
];

/// Read-only lookup indexes over the static tables
struct Catalog {
    by_id: HashMap<Language, &'static LanguageInfo>,
    by_name: HashMap<String, Language>,
    by_code: HashMap<&'static str, Language>,
    encodings_by_key: HashMap<String, Encoding>,
    detected: Vec<&'static str>,
    languages: Vec<(&'static str, &'static str)>,
    encodings: Vec<&'static str>,
}

impl Catalog {
    fn build() -> Self {
        let mut by_id = HashMap::with_capacity(LANGUAGE_TABLE.len());
        let mut by_name = HashMap::with_capacity(LANGUAGE_TABLE.len());
        let mut by_code = HashMap::with_capacity(LANGUAGE_TABLE.len());
        let mut detected = Vec::new();
        let mut languages = Vec::with_capacity(LANGUAGE_TABLE.len());

        for info in LANGUAGE_TABLE {
            by_id.insert(info.language, info);
            if info.language.is_unknown() {
                continue;
            }
            by_name.insert(info.name.to_ascii_uppercase(), info.language);
            by_code.insert(info.code, info.language);
            languages.push((info.name, info.code));
            if info.detectable {
                detected.push(info.name);
            }
        }

        let mut encodings_by_key = HashMap::with_capacity(ENCODING_TABLE.len());
        let mut encodings = Vec::with_capacity(ENCODING_TABLE.len());
        for (id, name) in ENCODING_TABLE.iter().enumerate() {
            let encoding = Encoding(id as u16);
            if encoding.is_unknown() {
                continue;
            }
            encodings_by_key.insert(encoding_key(name), encoding);
            encodings.push(*name);
        }

        debug!(
            "Catalog initialized: {} languages ({} detectable), {} encodings",
            languages.len(),
            detected.len(),
            encodings.len()
        );

        Self {
            by_id,
            by_name,
            by_code,
            encodings_by_key,
            detected,
            languages,
            encodings,
        }
    }
}

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::build);

// Encoding names compare without case or separators: "utf-8" == "UTF8"
fn encoding_key(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Resolve a human-readable language name (or short code) to its identifier.
/// Unmatched names yield `Language::UNKNOWN`.
pub fn language_from_name(name: &str) -> Language {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Language::UNKNOWN;
    }
    if let Some(lang) = CATALOG.by_name.get(&trimmed.to_ascii_uppercase()) {
        return *lang;
    }
    CATALOG
        .by_code
        .get(trimmed.to_ascii_lowercase().as_str())
        .or_else(|| CATALOG.by_code.get(trimmed))
        .copied()
        .unwrap_or(Language::UNKNOWN)
}

/// Resolve a language by its short code only ("fr", "zh-Hant")
pub fn language_from_code(code: &str) -> Language {
    let trimmed = code.trim();
    CATALOG
        .by_code
        .get(trimmed)
        .or_else(|| CATALOG.by_code.get(trimmed.to_ascii_lowercase().as_str()))
        .copied()
        .unwrap_or(Language::UNKNOWN)
}

/// Resolve an encoding name to its identifier.
/// Unmatched names yield `Encoding::UNKNOWN_ENCODING`.
pub fn encoding_from_name(name: &str) -> Encoding {
    let key = encoding_key(name.trim());
    if key.is_empty() {
        return Encoding::UNKNOWN_ENCODING;
    }
    CATALOG
        .encodings_by_key
        .get(&key)
        .copied()
        .unwrap_or(Encoding::UNKNOWN_ENCODING)
}

pub fn language_info(language: Language) -> Option<&'static LanguageInfo> {
    CATALOG.by_id.get(&language).copied()
}

pub fn language_name(language: Language) -> &'static str {
    language_info(language)
        .or_else(|| language_info(Language::UNKNOWN))
        .map_or("UNKNOWN", |info| info.name)
}

pub fn language_code(language: Language) -> &'static str {
    language_info(language)
        .or_else(|| language_info(Language::UNKNOWN))
        .map_or("un", |info| info.code)
}

pub fn encoding_name(encoding: Encoding) -> &'static str {
    ENCODING_TABLE
        .get(encoding.0 as usize)
        .copied()
        .unwrap_or("UNKNOWN_ENCODING")
}

/// Names of the languages the bundled engine can report (DETECTED_LANGUAGES)
pub fn detected_languages() -> &'static [&'static str] {
    &CATALOG.detected
}

/// Every known language as (name, code) pairs in table order (LANGUAGES)
pub fn languages() -> &'static [(&'static str, &'static str)] {
    &CATALOG.languages
}

/// Every known encoding name in table order (ENCODINGS)
pub fn encodings() -> &'static [&'static str] {
    &CATALOG.encodings
}

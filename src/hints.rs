// Hint resolution: human-readable hints to engine hint codes
// WHY: callers pass whatever strings they have, so every unusable hint degrades to a neutral default

use crate::catalog::{self, Encoding, Language};
use tracing::debug;

/// Engine hint bundle; every field is independently optional
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hints {
    /// Domain suffix of the source document ("fr", "co.uk"), passed through verbatim
    pub tld_hint: Option<String>,
    /// Raw HTTP Content-Language header value, passed through verbatim
    pub content_language_hint: Option<String>,
    pub language_hint: Language,
    pub encoding_hint: Encoding,
}

impl Default for Hints {
    fn default() -> Self {
        Self {
            tld_hint: None,
            content_language_hint: None,
            language_hint: Language::UNKNOWN,
            encoding_hint: Encoding::UNKNOWN_ENCODING,
        }
    }
}

impl Hints {
    /// True when no hint carries information
    pub fn is_neutral(&self) -> bool {
        *self == Hints::default()
    }
}

/// Build engine hints from the four caller-supplied strings.
/// Never fails: empty or unrecognized inputs become the neutral default.
pub fn resolve(
    tld_hint: &str,
    http_language_hint: &str,
    language_hint_name: &str,
    encoding_hint_name: &str,
) -> Hints {
    let mut hints = Hints::default();

    if !tld_hint.is_empty() {
        hints.tld_hint = Some(tld_hint.to_string());
    }
    if !http_language_hint.is_empty() {
        hints.content_language_hint = Some(http_language_hint.to_string());
    }
    if !language_hint_name.is_empty() {
        hints.language_hint = catalog::language_from_name(language_hint_name);
        if hints.language_hint.is_unknown() {
            debug!("Unrecognized language hint {:?}, ignoring", language_hint_name);
        }
    }
    if !encoding_hint_name.is_empty() {
        hints.encoding_hint = catalog::encoding_from_name(encoding_hint_name);
        if hints.encoding_hint.is_unknown() {
            debug!("Unrecognized encoding hint {:?}, ignoring", encoding_hint_name);
        }
    }

    hints
}

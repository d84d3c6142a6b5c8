// Stopword profiles for Latin-script languages

use crate::catalog::Language;

/// Scoring profile for one Latin-script language
#[derive(Debug)]
pub struct LatinProfile {
    pub language: Language,
    /// High-frequency function words, lowercase
    pub stopwords: &'static [&'static str],
    /// Letters rare outside this language (and its close neighbours)
    pub distinctive: &'static [char],
}

impl LatinProfile {
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word)
    }

    pub fn has_distinctive(&self, word: &str) -> bool {
        word.chars().any(|c| self.distinctive.contains(&c))
    }
}

pub static LATIN_PROFILES: &[LatinProfile] = &[
    LatinProfile {
        language: Language::ENGLISH,
        stopwords: &[
            "the", "of", "and", "to", "in", "is", "it", "that", "for", "was", "with", "as", "on",
            "be", "at", "by", "this", "are", "from", "have", "not", "or", "but", "you", "he",
            "she", "they", "we", "his", "her", "which", "there", "been", "were", "has", "had",
            "will", "would", "can", "an", "what", "all", "when", "if", "their", "its", "who",
            "our",
        ],
        distinctive: &[],
    },
    LatinProfile {
        language: Language::FRENCH,
        stopwords: &[
            "le", "la", "les", "de", "des", "du", "un", "une", "et", "est", "en", "que", "qui",
            "dans", "pour", "pas", "sur", "au", "aux", "avec", "ce", "cette", "il", "elle",
            "nous", "vous", "ils", "sont", "mais", "ou", "plus", "par", "son", "sa", "ses",
            "été", "très", "aussi", "leur", "comme",
        ],
        distinctive: &['œ', 'ê', 'â', 'î', 'û', 'ë', 'ù'],
    },
    LatinProfile {
        language: Language::GERMAN,
        stopwords: &[
            "der", "die", "das", "und", "ist", "nicht", "ein", "eine", "einen", "zu", "den",
            "dem", "des", "mit", "sich", "auf", "für", "von", "im", "auch", "es", "sie", "wir",
            "ich", "er", "wird", "werden", "sind", "war", "hat", "haben", "nach", "bei", "aus",
            "wie", "oder", "aber", "noch", "nur", "über", "dass",
        ],
        distinctive: &['ß', 'ä', 'ö', 'ü'],
    },
    LatinProfile {
        language: Language::SPANISH,
        stopwords: &[
            "el", "la", "los", "las", "de", "del", "que", "y", "en", "un", "una", "es", "por",
            "con", "para", "no", "se", "su", "sus", "al", "lo", "como", "más", "pero", "este",
            "esta", "está", "son", "muy", "también", "fue", "ha", "hay", "yo", "ella",
            "nosotros",
        ],
        distinctive: &['ñ'],
    },
    LatinProfile {
        language: Language::ITALIAN,
        stopwords: &[
            "il", "lo", "la", "gli", "le", "di", "del", "della", "che", "e", "è", "un", "una",
            "per", "con", "non", "si", "sono", "ma", "anche", "come", "più", "questo", "questa",
            "nel", "nella", "alla", "dei", "delle", "io", "lui", "lei", "noi", "ha", "hanno",
            "era",
        ],
        distinctive: &['ì', 'ò'],
    },
    LatinProfile {
        language: Language::PORTUGUESE,
        stopwords: &[
            "o", "a", "os", "as", "de", "do", "da", "dos", "das", "que", "e", "em", "um", "uma",
            "é", "não", "para", "com", "por", "se", "no", "na", "nos", "mais", "como", "mas",
            "foi", "são", "seu", "sua", "ele", "ela", "eles", "muito", "também", "está", "isso",
        ],
        distinctive: &['ã', 'õ'],
    },
    LatinProfile {
        language: Language::DUTCH,
        stopwords: &[
            "de", "het", "een", "en", "van", "is", "dat", "die", "in", "niet", "op", "te", "met",
            "zijn", "voor", "er", "maar", "ook", "als", "bij", "aan", "om", "wordt", "worden",
            "door", "naar", "uit", "nog", "dan", "wel", "hij", "zij", "wij", "ik", "geen",
            "heeft", "hebben",
        ],
        distinctive: &['ĳ'],
    },
    LatinProfile {
        language: Language::SWEDISH,
        stopwords: &[
            "och", "att", "det", "som", "en", "ett", "är", "på", "av", "för", "med", "till",
            "den", "har", "inte", "om", "var", "jag", "han", "hon", "vi", "de", "men", "så",
            "kan", "eller", "från", "vid", "också", "efter", "sig", "skulle", "hade", "mycket",
        ],
        distinctive: &['å', 'ä', 'ö'],
    },
    LatinProfile {
        language: Language::DANISH,
        stopwords: &[
            "og", "at", "det", "som", "en", "et", "er", "på", "af", "for", "med", "til", "den",
            "har", "ikke", "om", "var", "jeg", "han", "hun", "vi", "de", "men", "så", "kan",
            "eller", "fra", "ved", "også", "efter", "sig", "skulle", "havde", "meget",
        ],
        distinctive: &['æ', 'ø', 'å'],
    },
    LatinProfile {
        language: Language::NORWEGIAN,
        stopwords: &[
            "og", "at", "det", "som", "en", "et", "er", "på", "av", "for", "med", "til", "den",
            "har", "ikke", "om", "var", "jeg", "han", "hun", "vi", "de", "men", "så", "kan",
            "eller", "fra", "ved", "også", "etter", "seg", "skulle", "hadde", "mye",
        ],
        distinctive: &['æ', 'ø', 'å'],
    },
    LatinProfile {
        language: Language::FINNISH,
        stopwords: &[
            "ja", "on", "ei", "se", "että", "hän", "oli", "ovat", "kuin", "mutta", "tai", "joka",
            "jos", "niin", "myös", "kun", "vain", "mukaan", "sekä", "tämä", "siitä", "sen",
            "hänen", "olla", "voi", "ole", "minä", "me", "te", "he", "nyt",
        ],
        distinctive: &['ä', 'ö'],
    },
    LatinProfile {
        language: Language::POLISH,
        stopwords: &[
            "i", "w", "na", "z", "że", "się", "nie", "do", "jest", "to", "jak", "ale", "o", "od",
            "po", "dla", "tak", "jego", "jej", "przez", "są", "był", "była", "oraz", "czy",
            "tylko", "już", "co", "ten", "ta", "które", "który",
        ],
        distinctive: &['ł', 'ą', 'ę', 'ś', 'ć', 'ż', 'ź', 'ń'],
    },
    LatinProfile {
        language: Language::CZECH,
        stopwords: &[
            "a", "v", "na", "se", "je", "že", "to", "s", "z", "do", "o", "jako", "ale", "by",
            "jeho", "jej", "pro", "tak", "které", "který", "jsou", "byl", "byla", "být", "od",
            "po", "také", "už", "jen", "nebo", "při",
        ],
        distinctive: &['ř', 'ě', 'ů', 'č', 'š', 'ž'],
    },
    LatinProfile {
        language: Language::HUNGARIAN,
        stopwords: &[
            "a", "az", "és", "hogy", "nem", "is", "egy", "meg", "de", "van", "volt", "ez", "azt",
            "csak", "már", "mint", "még", "kell", "ki", "el", "fel", "vagy", "lesz", "nagyon",
            "ami", "amely", "után", "pedig",
        ],
        distinctive: &['ő', 'ű'],
    },
    LatinProfile {
        language: Language::ROMANIAN,
        stopwords: &[
            "și", "şi", "în", "de", "la", "cu", "pe", "un", "o", "este", "nu", "care", "din",
            "că", "se", "sunt", "pentru", "mai", "dar", "sau", "ca", "ce", "lui", "fost", "acest",
            "această", "foarte",
        ],
        distinctive: &['ș', 'ț', 'ă', 'ţ'],
    },
    LatinProfile {
        language: Language::TURKISH,
        stopwords: &[
            "ve", "bir", "bu", "da", "de", "için", "ile", "çok", "ne", "ama", "gibi", "daha",
            "olan", "olarak", "ben", "sen", "o", "biz", "onlar", "var", "yok", "değil", "kadar",
            "sonra", "her", "şey", "mi", "mı",
        ],
        distinctive: &['ğ', 'ı'],
    },
    LatinProfile {
        language: Language::INDONESIAN,
        stopwords: &[
            "yang", "dan", "di", "ke", "dari", "ini", "itu", "dengan", "untuk", "tidak", "ada",
            "dalam", "akan", "pada", "juga", "saya", "kami", "mereka", "adalah", "atau", "oleh",
            "sudah", "karena", "bisa", "seperti", "tetapi",
        ],
        distinctive: &[],
    },
    LatinProfile {
        language: Language::CATALAN,
        stopwords: &[
            "el", "la", "els", "les", "de", "del", "que", "i", "a", "en", "un", "una", "és",
            "per", "amb", "no", "es", "són", "però", "com", "més", "aquest", "aquesta", "seva",
            "seu", "també", "molt", "hi", "va", "ho",
        ],
        distinctive: &['ŀ'],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_every_profile_language_is_detectable() {
        for profile in LATIN_PROFILES {
            let info = catalog::language_info(profile.language).expect("profile language in catalog");
            assert!(info.detectable, "{} should be listed as detectable", info.name);
        }
    }

    #[test]
    fn test_stopwords_are_lowercase() {
        for profile in LATIN_PROFILES {
            for word in profile.stopwords {
                assert_eq!(*word, word.to_lowercase(), "{word} in {}", profile.language);
            }
        }
    }

    #[test]
    fn test_profile_lookup() {
        let german = LATIN_PROFILES
            .iter()
            .find(|p| p.language == Language::GERMAN)
            .unwrap();
        assert!(german.is_stopword("und"));
        assert!(german.has_distinctive("straße"));
        assert!(!LATIN_PROFILES.iter().any(|p| p.language == Language::JAPANESE));
    }
}

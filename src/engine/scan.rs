// Byte scanner that splits input into scored segments of words
// WHY: chunk offsets must stay byte offsets into the caller's buffer, so scanning walks the raw
// bytes and never re-encodes the text

/// Writing system of a run of letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Latin,
    Cyrillic,
    Greek,
    Arabic,
    Hebrew,
    Hangul,
    Kana,
    Han,
    Thai,
    Devanagari,
    Other,
}

impl Script {
    pub fn of(c: char) -> Script {
        match c as u32 {
            0x0041..=0x024F | 0x1E00..=0x1EFF => Script::Latin,
            0x0370..=0x03FF | 0x1F00..=0x1FFF => Script::Greek,
            0x0400..=0x052F => Script::Cyrillic,
            0x0590..=0x05FF => Script::Hebrew,
            0x0600..=0x06FF | 0x0750..=0x077F => Script::Arabic,
            0x0900..=0x097F => Script::Devanagari,
            0x0E00..=0x0E7F => Script::Thai,
            0x1100..=0x11FF | 0x3130..=0x318F | 0xAC00..=0xD7AF => Script::Hangul,
            0x3040..=0x30FF | 0x31F0..=0x31FF => Script::Kana,
            0x3400..=0x4DBF | 0x4E00..=0x9FFF | 0xF900..=0xFAFF => Script::Han,
            _ => Script::Other,
        }
    }

}

/// A run of same-script letters, lowercased
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub script: Script,
}

impl Word {
    pub fn byte_len(&self) -> usize {
        self.end - self.start
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Contiguous byte range ending at a sentence or line boundary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub words: Vec<Word>,
}

impl Segment {
    /// Bytes of letter content, excluding markup, punctuation and spacing
    pub fn letter_bytes(&self) -> usize {
        self.words.iter().map(Word::byte_len).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Markup {
    Text,
    // Saw '<'; the next char decides whether a tag starts
    TagOpen,
    Tag,
    Entity(u8),
}

// Longest entity body we still treat as markup ("&thetasym;")
const MAX_ENTITY_LEN: u8 = 10;

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '。' | '！' | '？' | '؟' | '।' | '…')
}

struct Scanner {
    is_plain_text: bool,
    markup: Markup,
    segments: Vec<Segment>,
    current: Segment,
    word: Option<Word>,
    pending_break: bool,
}

impl Scanner {
    fn new(is_plain_text: bool) -> Self {
        Self {
            is_plain_text,
            markup: Markup::Text,
            segments: Vec::new(),
            current: Segment::default(),
            word: None,
            pending_break: false,
        }
    }

    fn flush_word(&mut self) {
        if let Some(word) = self.word.take() {
            self.current.words.push(word);
        }
    }

    fn cut(&mut self, at: usize) {
        self.flush_word();
        if at > self.current.start {
            let next = Segment {
                start: at,
                ..Segment::default()
            };
            let mut done = std::mem::replace(&mut self.current, next);
            done.end = at;
            self.segments.push(done);
        }
        self.pending_break = false;
    }

    // Returns true when the character belongs to markup and must not be scored
    fn step_markup(&mut self, c: char) -> bool {
        if self.is_plain_text {
            return false;
        }
        match self.markup {
            Markup::TagOpen => {
                if c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?') {
                    self.markup = Markup::Tag;
                    true
                } else {
                    // Bare '<' as in "3 < 5": rescan this char as text
                    self.markup = Markup::Text;
                    self.step_markup(c)
                }
            }
            Markup::Tag => {
                if c == '>' {
                    self.markup = Markup::Text;
                }
                true
            }
            Markup::Entity(seen) => {
                if c == ';' || c.is_whitespace() || seen >= MAX_ENTITY_LEN {
                    self.markup = Markup::Text;
                } else {
                    self.markup = Markup::Entity(seen + 1);
                }
                true
            }
            Markup::Text => match c {
                '<' => {
                    self.markup = Markup::TagOpen;
                    true
                }
                '&' => {
                    self.markup = Markup::Entity(0);
                    true
                }
                _ => false,
            },
        }
    }

    fn push_char(&mut self, pos: usize, c: char) {
        if self.step_markup(c) {
            self.flush_word();
            return;
        }

        if c == '\n' {
            self.cut(pos + 1);
            return;
        }

        if self.pending_break && c.is_whitespace() {
            self.cut(pos);
        }

        if c.is_alphabetic() {
            self.pending_break = false;
            let script = Script::of(c);
            let end = pos + c.len_utf8();
            match self.word.as_mut() {
                Some(word) if word.script == script => {
                    word.end = end;
                    word.text.extend(c.to_lowercase());
                }
                _ => {
                    self.flush_word();
                    self.word = Some(Word {
                        start: pos,
                        end,
                        text: c.to_lowercase().collect(),
                        script,
                    });
                }
            }
            return;
        }

        self.flush_word();
        if is_terminator(c) {
            self.pending_break = true;
        } else if !c.is_whitespace() {
            self.pending_break = false;
        }
    }

    fn push_invalid(&mut self) {
        self.flush_word();
    }

    fn finish(mut self, len: usize) -> Vec<Segment> {
        self.cut(len);
        self.segments
    }
}

/// Split `text` into contiguous segments covering `0..text.len()`.
///
/// With `is_plain_text == false`, `<...>` tags and `&...;` entities are skipped
/// for scoring but stay inside segment ranges. Invalid UTF-8 bytes break words.
pub fn segment(text: &[u8], is_plain_text: bool) -> Vec<Segment> {
    let mut scanner = Scanner::new(is_plain_text);
    let mut base = 0usize;

    for chunk in text.utf8_chunks() {
        let valid = chunk.valid();
        for (idx, c) in valid.char_indices() {
            scanner.push_char(base + idx, c);
        }
        base += valid.len();
        if !chunk.invalid().is_empty() {
            scanner.push_invalid();
            base += chunk.invalid().len();
        }
    }

    scanner.finish(text.len())
}

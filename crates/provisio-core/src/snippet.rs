//! Context windows around statutory-reference keywords.
//!
//! Decision text cites provisions as "article 1382", "artikel 6", "art. 10",
//! "artt. 3 en 4" and so on, in French and Dutch. For every keyword hit a
//! window of up to [`CONTEXT_WINDOW_SIZE`] characters on each side is cut out
//! of the text, widened to whole words, and whitespace-normalised.
//!
//! # Window boundaries
//!
//! Offsets are counted in characters, not bytes.
//!
//! 1. Raw window: `[start - W, end + W]`, clamped to the text.
//! 2. Left edge: the character after the last space before the raw start.
//!    If there is no such space the raw start is kept as-is, which can still
//!    split a word when the hit sits close to the start of an unbroken run.
//! 3. Right edge: the first space at or after the raw end, or the end of the
//!    text.
//!
//! Hits in overlapping windows often produce the same snippet. Identical
//! snippets collapse in a set; there is no merging of overlapping ones.

use std::collections::HashSet;
use std::ops::Range;

use regex::Regex;

/// Inflected forms of "article" in French and Dutch, including abbreviations.
pub const PROVISION_KEYWORDS: &[&str] = &[
    "article",
    "articles",
    "artikel",
    "artikels",
    "artikelen",
    "art.",
    "artt.",
    "arts.",
];

/// Characters of context kept on each side of a keyword.
pub const CONTEXT_WINDOW_SIZE: usize = 250;

/// Compile a case-insensitive, whole-word pattern for `keywords`.
///
/// Keywords are escaped. A keyword ending in a word character must also end
/// on a word boundary; one ending in punctuation (`art.`) is already
/// terminated by it, so "art. 10" and "art.10" both match.
pub fn keyword_pattern(keywords: &[&str]) -> Result<Regex, regex::Error> {
    let alternatives: Vec<String> = keywords
        .iter()
        .map(|kw| {
            let escaped = regex::escape(kw);
            let ends_in_word = kw
                .chars()
                .last()
                .is_some_and(|c| c.is_alphanumeric() || c == '_');
            if ends_in_word {
                format!(r"{escaped}\b")
            } else {
                escaped
            }
        })
        .collect();
    Regex::new(&format!(r"(?i)\b(?:{})", alternatives.join("|")))
}

/// Finds provision keywords and cuts clean context snippets around them.
#[derive(Debug, Clone)]
pub struct SnippetExtractor {
    pattern: Regex,
    window: usize,
}

impl SnippetExtractor {
    /// Extractor over [`PROVISION_KEYWORDS`] with `window` characters of
    /// context on each side.
    pub fn new(window: usize) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: keyword_pattern(PROVISION_KEYWORDS)?,
            window,
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Whether `text` contains at least one keyword.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Every unique snippet in `text`. Empty text yields an empty set.
    pub fn snippets(&self, text: &str) -> HashSet<String> {
        let mut unique = HashSet::new();
        if text.is_empty() {
            return unique;
        }

        let mut hits = 0usize;
        for m in self.pattern.find_iter(text) {
            hits += 1;
            let range = clean_window(text, m.start(), m.end(), self.window);
            let snippet = normalize_whitespace(&text[range]);
            if !snippet.is_empty() {
                unique.insert(snippet);
            }
        }

        tracing::debug!(hits, unique = unique.len(), "extracted provision snippets");
        unique
    }
}

/// Byte range of the word-aligned window around the match `start..end`.
///
/// `start` and `end` are byte offsets on char boundaries, as returned by
/// [`regex::Match`]; `window` is in characters.
pub fn clean_window(text: &str, start: usize, end: usize, window: usize) -> Range<usize> {
    let raw_start = chars_back(text, start, window);
    let raw_end = chars_forward(text, end, window);

    let clean_start = text[..raw_start]
        .rfind(' ')
        .map(|space| space + 1)
        .unwrap_or(raw_start);
    let clean_end = text[raw_end..]
        .find(' ')
        .map(|space| raw_end + space)
        .unwrap_or(text.len());

    clean_start..clean_end
}

/// Collapse every whitespace run to a single space and trim both ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Byte offset `n` characters before `from`, or 0.
fn chars_back(text: &str, from: usize, n: usize) -> usize {
    if n == 0 {
        return from;
    }
    text[..from]
        .char_indices()
        .rev()
        .nth(n - 1)
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset `n` characters after `from`, or the text length.
fn chars_forward(text: &str, from: usize, n: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(n)
        .map(|(i, _)| from + i)
        .unwrap_or(text.len())
}

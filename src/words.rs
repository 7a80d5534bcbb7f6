//! Word list input and normalization into deduplicated uppercase entries.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use crate::common::PuzzleError;
use crate::config::Mode;

/// A normalized target word with its optional hint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct WordEntry {
    pub word: String,
    pub hint: Option<String>,
}

impl WordEntry {
    /// Build an entry from raw text, normalizing the word.
    pub fn new(word: &str, hint: Option<&str>) -> Self {
        Self {
            word: normalize_word(word),
            hint: hint
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(String::from),
        }
    }

    /// Length of the word in letters.
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// One item of a word list: a bare word or a word/hint record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Deserialize))]
#[cfg_attr(feature = "std", serde(untagged))]
pub enum RawEntry {
    Word(String),
    Record {
        #[cfg_attr(feature = "std", serde(default))]
        word: Option<String>,
        #[cfg_attr(feature = "std", serde(default))]
        hint: Option<String>,
    },
}

impl RawEntry {
    fn parts(&self) -> (&str, &str) {
        match self {
            RawEntry::Word(w) => (w.as_str(), ""),
            RawEntry::Record { word, hint } => (
                word.as_deref().unwrap_or(""),
                hint.as_deref().unwrap_or(""),
            ),
        }
    }
}

/// A word list as configured: either `"CAT, DOG"` or a list of items.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Deserialize))]
#[cfg_attr(feature = "std", serde(untagged))]
pub enum WordListInput {
    Csv(String),
    Items(Vec<RawEntry>),
}

impl Default for WordListInput {
    fn default() -> Self {
        WordListInput::Items(Vec::new())
    }
}

/// Uppercase `raw` and keep only its letters.
pub fn normalize_word(raw: &str) -> String {
    raw.trim()
        .to_uppercase()
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect()
}

/// Normalize a raw word list into entries, preserving first-occurrence order.
///
/// Empty words and duplicates (after normalization) are dropped. In
/// [`Mode::Hint`] every kept word must carry a non-empty hint.
pub fn normalize_entries(input: &WordListInput, mode: Mode) -> Result<Vec<WordEntry>, PuzzleError> {
    let raw: Vec<(&str, &str)> = match input {
        WordListInput::Csv(list) => list.split(',').map(|w| (w, "")).collect(),
        WordListInput::Items(items) => items.iter().map(RawEntry::parts).collect(),
    };

    let mut entries = Vec::new();
    let mut seen = BTreeSet::new();
    for (word, hint) in raw {
        let trimmed = word.trim();
        let normalized = normalize_word(trimmed);
        if normalized.is_empty() || seen.contains(&normalized) {
            continue;
        }
        let hint = hint.trim();
        if mode == Mode::Hint && hint.is_empty() {
            return Err(PuzzleError::MissingHint {
                word: String::from(trimmed),
            });
        }
        seen.insert(normalized.clone());
        entries.push(WordEntry {
            word: normalized,
            hint: (!hint.is_empty()).then(|| String::from(hint)),
        });
    }

    if entries.is_empty() {
        return Err(PuzzleError::EmptyWordList);
    }
    log::debug!("normalized {} word entries", entries.len());
    Ok(entries)
}

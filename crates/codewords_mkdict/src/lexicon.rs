//! WordNet index file parsing.
//!
//! Index lines look like `lemma pos synset_cnt p_cnt [ptr_symbol...] ...`.
//! Only the first two fields matter here. The license header at the top of
//! each index file is indented by two spaces, which is how it gets skipped.

use std::fmt;
use std::io::{self, BufRead};

/// A WordNet syntactic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    /// `n`
    Noun,
    /// `v`
    Verb,
    /// `a`
    Adjective,
    /// `r`
    Adverb,
}

impl PartOfSpeech {
    /// The marker used in the second field of an index line.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Noun => "n",
            Self::Verb => "v",
            Self::Adjective => "a",
            Self::Adverb => "r",
        }
    }

    /// Parses an index line marker.
    #[must_use]
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "n" => Some(Self::Noun),
            "v" => Some(Self::Verb),
            "a" => Some(Self::Adjective),
            "r" => Some(Self::Adverb),
            _ => None,
        }
    }

    /// Path of this category's index file inside the WordNet tarball.
    #[must_use]
    pub const fn index_entry(self) -> &'static str {
        match self {
            Self::Noun => "dict/index.noun",
            Self::Verb => "dict/index.verb",
            Self::Adjective => "dict/index.adj",
            Self::Adverb => "dict/index.adv",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
        };
        f.write_str(name)
    }
}

/// A headword and its category, as read from one index line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexiconEntry {
    /// The lemma exactly as written in the index (lowercase, `_` for spaces).
    pub word: String,
    /// The category marker that followed it.
    pub pos: PartOfSpeech,
}

impl LexiconEntry {
    /// Parses one index line. Returns `None` for lines that are not entries.
    #[must_use]
    pub fn parse_line(line: &str) -> Option<Self> {
        if line.starts_with(char::is_whitespace) {
            return None;
        }

        let mut fields = line.split_whitespace();
        let word = fields.next()?;
        let pos = PartOfSpeech::from_marker(fields.next()?)?;

        Some(Self {
            word: word.to_string(),
            pos,
        })
    }
}

/// Reads every headword of category `pos` from an index file, in file order.
///
/// Duplicates are kept. Lines of other categories and non-entry lines are
/// skipped.
///
/// # Errors
///
/// Propagates read errors, including invalid UTF-8.
pub fn read_headwords<R: BufRead>(reader: R, pos: PartOfSpeech) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(entry) = LexiconEntry::parse_line(&line?) {
            if entry.pos == pos {
                words.push(entry.word);
            }
        }
    }
    Ok(words)
}

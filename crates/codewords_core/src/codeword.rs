//! The `<adjective>-<noun>` value type.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Separator between the adjective and the noun.
pub const SEPARATOR: char = '-';

/// A generated codeword.
///
/// Displays as `adjective-noun`. Codewords carry no identity beyond their
/// string value and are not unique: two draws may produce the same one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Codeword {
    /// The adjective half.
    pub adjective: String,
    /// The noun half.
    pub noun: String,
}

impl Codeword {
    /// Creates a codeword from its two halves.
    #[must_use]
    pub fn new(adjective: impl Into<String>, noun: impl Into<String>) -> Self {
        Self {
            adjective: adjective.into(),
            noun: noun.into(),
        }
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.adjective, self.noun)
    }
}

impl FromStr for Codeword {
    type Err = Error;

    /// Parses `adjective-noun`. Both halves must be non-empty lowercase ASCII
    /// words and there must be exactly one separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (adjective, noun) = s
            .split_once(SEPARATOR)
            .ok_or_else(|| Error::invalid_codeword(s))?;

        let is_word = |w: &str| !w.is_empty() && w.bytes().all(|b| b.is_ascii_lowercase());
        if !is_word(adjective) || !is_word(noun) {
            return Err(Error::invalid_codeword(s));
        }

        Ok(Self::new(adjective, noun))
    }
}

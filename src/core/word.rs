//! Word representation
//!
//! A `Word` is a validated 5-letter lowercase word. Every `Word` that exists
//! satisfies the scorer's precondition, so scoring itself never has to check.

use std::fmt;
use std::str::FromStr;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word made of the lowercase letters `a` to `z`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// Input had this many characters instead of 5
    InvalidLength(usize),
    /// Input contained a character outside `a..=z`
    InvalidAlphabet(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidAlphabet(ch) => {
                write!(f, "Word must contain only lowercase letters a-z, found {ch:?}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is taken as-is: uppercase letters are rejected rather than folded,
    /// so that vocabulary lookups stay case-sensitive.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Any character is outside `a..=z`
    ///
    /// # Examples
    /// ```
    /// use wordle_scorer::core::{Word, WordError};
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert_eq!(Word::new("ab"), Err(WordError::InvalidLength(2)));
    /// assert_eq!(Word::new("sh0rt"), Err(WordError::InvalidAlphabet('0')));
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordError::InvalidAlphabet(bad));
        }

        // All five characters are ASCII, so there are exactly five bytes
        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new("ab"), Err(WordError::InvalidLength(2)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        // Five characters, but 'é' is two bytes
        assert_eq!(Word::new("caf\u{e9}s"), Err(WordError::InvalidAlphabet('\u{e9}')));
        assert_eq!(Word::new("\u{e9}\u{e9}\u{e9}"), Err(WordError::InvalidLength(3)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidAlphabet('3')));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidAlphabet(' ')));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidAlphabet('!')));
    }

    #[test]
    fn word_creation_rejects_uppercase() {
        assert_eq!(Word::new("CRANE"), Err(WordError::InvalidAlphabet('C')));
        assert_eq!(Word::new("crAne"), Err(WordError::InvalidAlphabet('A')));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), b'c');
        assert_eq!(word.char_at(2), b'a');
        assert_eq!(word.char_at(4), b'e');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'c'));
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_from_str() {
        let word: Word = "slate".parse().unwrap();
        assert_eq!(word.text(), "slate");
        assert!("slat".parse::<Word>().is_err());
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_error_display() {
        assert_eq!(
            WordError::InvalidLength(2).to_string(),
            "Word must be exactly 5 letters, got 2"
        );
        assert_eq!(
            WordError::InvalidAlphabet('3').to_string(),
            "Word must contain only lowercase letters a-z, found '3'"
        );
    }
}

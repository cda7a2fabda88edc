//! Vocabulary of legal guesses
//!
//! An ordered, owned collection of words loaded from a word list, plus the
//! membership test used to validate guesses.

pub mod loader;

pub use loader::{VocabularyError, load_from_file, parse_words};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Ordered collection of words, in word-list order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<Word>,
}

impl Vocabulary {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Check whether `candidate` is one of the words (case-sensitive)
    ///
    /// # Examples
    /// ```
    /// use wordle_scorer::vocabulary::parse_words;
    ///
    /// let vocabulary = parse_words("apple\nmango\n").unwrap();
    /// assert!(vocabulary.contains("apple"));
    /// assert!(!vocabulary.contains("zzzzz"));
    /// assert!(!vocabulary.contains("APPLE"));
    /// ```
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        is_valid_guess(candidate, &self.words)
    }

    /// Pick a secret uniformly at random, or `None` if empty
    pub fn choose_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Check whether `candidate` appears in `words` by exact string equality
///
/// Linear scan; fine for word lists of a few thousand entries.
#[must_use]
pub fn is_valid_guess(candidate: &str, words: &[Word]) -> bool {
    words.iter().any(|w| w.text() == candidate)
}

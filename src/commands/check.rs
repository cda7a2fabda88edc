//! Guess validation command

use crate::core::{Word, WordError};
use crate::vocabulary::Vocabulary;

/// Result of checking a candidate guess
pub struct CheckResult {
    pub word: String,
    /// Why the candidate is not a well-formed word, if it is not
    pub malformed: Option<WordError>,
    pub in_vocabulary: bool,
    pub vocabulary_size: usize,
}

impl CheckResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.malformed.is_none() && self.in_vocabulary
    }
}

/// Check whether `word` is a legal guess for `vocabulary`
#[must_use]
pub fn check_word(word: &str, vocabulary: &Vocabulary) -> CheckResult {
    CheckResult {
        word: word.to_string(),
        malformed: Word::new(word).err(),
        in_vocabulary: vocabulary.contains(word),
        vocabulary_size: vocabulary.len(),
    }
}

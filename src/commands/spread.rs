//! Pattern spread command
//!
//! Shows how a guess splits the vocabulary into feedback buckets.

use crate::core::{FeedbackPattern, Word, partition};
use crate::vocabulary::Vocabulary;

/// Result of partitioning the vocabulary by one guess
pub struct SpreadResult {
    pub guess: String,
    /// Buckets sorted by size, largest first; ties by pattern codes
    pub buckets: Vec<(FeedbackPattern, usize)>,
    pub total_secrets: usize,
}

impl SpreadResult {
    /// Number of distinct patterns the guess can produce
    #[must_use]
    pub fn distinct_patterns(&self) -> usize {
        self.buckets.len()
    }

    /// Size of the largest bucket (worst-case remaining secrets)
    #[must_use]
    pub fn largest_bucket(&self) -> usize {
        self.buckets.first().map_or(0, |&(_, count)| count)
    }
}

/// Partition every vocabulary word by the pattern `guess` produces against it
///
/// # Errors
///
/// Returns an error if the guess is not a 5-letter lowercase word.
pub fn spread_guess(guess: &str, vocabulary: &Vocabulary) -> Result<SpreadResult, String> {
    let guess_word = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let mut buckets: Vec<(FeedbackPattern, usize)> =
        partition(&guess_word, vocabulary.words()).into_iter().collect();
    buckets.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| a.0.to_codes().cmp(&b.0.to_codes()))
    });

    Ok(SpreadResult {
        guess: guess.to_string(),
        buckets,
        total_secrets: vocabulary.len(),
    })
}

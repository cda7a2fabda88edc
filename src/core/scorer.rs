//! Guess scoring
//!
//! Implements the two-pass feedback rules, including duplicate letters:
//! a letter guessed twice but present once (unmatched) in the secret is
//! marked `Present` only at its leftmost unmatched position.

use super::feedback::{Feedback, FeedbackPattern};
use super::tally::LetterTally;
use super::word::{WORD_LENGTH, Word, WordError};
use log::{debug, trace};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Outcome of scoring one guess against one secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    pub pattern: FeedbackPattern,
    /// True iff the guess is the secret (every position `Exact`)
    pub is_exact_match: bool,
}

/// Score `guess` against `secret`
///
/// # Algorithm
/// 1. First pass: mark exact matches. Every other position starts `Absent`
///    and its letters are counted into a secret tally and a guess tally.
/// 2. Second pass, left to right: an `Absent` position is upgraded to
///    `Present` when both tallies still hold its letter; the secret tally is
///    then decremented. The guess tally is never decremented.
///
/// # Examples
/// ```
/// use wordle_scorer::core::{Feedback, Word, score};
///
/// let secret = Word::new("melon").unwrap();
/// let guess = Word::new("lemon").unwrap();
/// let result = score(&secret, &guess);
///
/// assert_eq!(result.pattern.to_codes(), "ygygg");
/// assert!(!result.is_exact_match);
/// ```
#[must_use]
pub fn score(secret: &Word, guess: &Word) -> Score {
    let mut symbols = [Feedback::Absent; WORD_LENGTH];
    let mut secret_tally = LetterTally::new();
    let mut guess_tally = LetterTally::new();
    let mut is_exact_match = true;

    // First pass: exact matches
    for (i, (&s, &g)) in secret.chars().iter().zip(guess.chars()).enumerate() {
        if s == g {
            symbols[i] = Feedback::Exact;
        } else {
            secret_tally.add(s);
            guess_tally.add(g);
            is_exact_match = false;
        }
    }

    // Second pass: present-but-misplaced, leftmost first
    for (symbol, &g) in symbols.iter_mut().zip(guess.chars()) {
        if *symbol == Feedback::Absent
            && guess_tally.remaining(g) > 0
            && secret_tally.take(g)
        {
            *symbol = Feedback::Present;
        }
    }

    let pattern = FeedbackPattern::new(symbols);
    trace!("scored {guess} against {secret}: {pattern}");

    Score {
        pattern,
        is_exact_match,
    }
}

/// Validate two raw strings and score them
///
/// # Errors
/// Returns `WordError` if either input is not a 5-letter lowercase word.
/// The secret is checked first.
///
/// # Examples
/// ```
/// use wordle_scorer::core::{WordError, score_words};
///
/// assert_eq!(score_words("ab", "abcde"), Err(WordError::InvalidLength(2)));
/// assert!(score_words("crane", "crane").unwrap().is_exact_match);
/// ```
pub fn score_words(secret: &str, guess: &str) -> Result<Score, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    Ok(score(&secret, &guess))
}

/// Score one guess against many secrets in parallel
///
/// The result has one entry per secret, in the same order.
#[must_use]
pub fn score_against(guess: &Word, secrets: &[Word]) -> Vec<Score> {
    debug!("scoring {guess} against {} secrets", secrets.len());
    secrets
        .par_iter()
        .map(|secret| score(secret, guess))
        .collect()
}

/// Count how many secrets produce each feedback pattern for `guess`
#[must_use]
pub fn partition(guess: &Word, secrets: &[Word]) -> FxHashMap<FeedbackPattern, usize> {
    secrets
        .par_iter()
        .fold(FxHashMap::default, |mut counts, secret| {
            *counts.entry(score(secret, guess).pattern).or_insert(0) += 1;
            counts
        })
        .reduce(FxHashMap::default, |mut merged, part| {
            for (pattern, count) in part {
                *merged.entry(pattern).or_insert(0) += count;
            }
            merged
        })
}

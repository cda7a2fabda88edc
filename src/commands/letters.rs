//! Letter knowledge command
//!
//! Scores a sequence of guesses against one secret and accumulates what is
//! known about each guessed letter.

use crate::core::{LetterStates, Score, Word, score};

/// Result of scoring a sequence of guesses
#[derive(Debug)]
pub struct LettersResult {
    pub secret: Word,
    pub rows: Vec<(Word, Score)>,
    pub states: LetterStates,
}

/// Score each guess in order and fold the feedback into letter states
///
/// # Errors
///
/// Returns an error if the secret or any guess is not a 5-letter lowercase word.
pub fn collect_letters(secret: &str, guesses: &[String]) -> Result<LettersResult, String> {
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;

    let mut rows = Vec::with_capacity(guesses.len());
    let mut states = LetterStates::new();

    for text in guesses {
        let guess =
            Word::new(text.as_str()).map_err(|e| format!("Invalid guess '{text}': {e}"))?;
        let result = score(&secret, &guess);
        states.record(&guess, &result.pattern);
        rows.push((guess, result));
    }

    Ok(LettersResult {
        secret,
        rows,
        states,
    })
}

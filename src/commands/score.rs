//! Score command
//!
//! Scores a single guess against a given or randomly drawn secret.

use crate::core::{Score, Word, score};
use crate::vocabulary::Vocabulary;
use log::info;
use rand::Rng;

/// Configuration for scoring a guess
pub struct ScoreConfig {
    pub guess: String,
    /// Secret to score against; drawn from the vocabulary when `None`
    pub secret: Option<String>,
    /// Reject guesses that are not in the vocabulary
    pub check_guess: bool,
}

impl ScoreConfig {
    #[must_use]
    pub const fn new(guess: String, secret: Option<String>) -> Self {
        Self {
            guess,
            secret,
            check_guess: false,
        }
    }

    #[must_use]
    pub fn with_check(mut self, check_guess: bool) -> Self {
        self.check_guess = check_guess;
        self
    }

    /// Whether running this config needs a loaded vocabulary
    #[must_use]
    pub const fn needs_vocabulary(&self) -> bool {
        self.check_guess || self.secret.is_none()
    }
}

/// Result of scoring a guess
#[derive(Debug)]
pub struct ScoreResult {
    pub secret: Word,
    pub guess: Word,
    pub score: Score,
    pub random_secret: bool,
}

/// Score a guess as described by `config`
///
/// # Errors
///
/// Returns an error if:
/// - The guess or secret is not a 5-letter lowercase word
/// - `check_guess` is set and the guess is not in the vocabulary
/// - No secret was given and the vocabulary is empty
pub fn score_guess<R: Rng + ?Sized>(
    config: ScoreConfig,
    vocabulary: &Vocabulary,
    rng: &mut R,
) -> Result<ScoreResult, String> {
    let guess = Word::new(config.guess).map_err(|e| format!("Invalid guess: {e}"))?;

    if config.check_guess && !vocabulary.contains(guess.text()) {
        return Err(format!("Guess '{guess}' not in vocabulary"));
    }

    let (secret, random_secret) = match config.secret {
        Some(text) => (
            Word::new(text).map_err(|e| format!("Invalid secret: {e}"))?,
            false,
        ),
        None => {
            let secret = vocabulary
                .choose_secret(rng)
                .ok_or_else(|| "Vocabulary is empty, cannot draw a secret".to_string())?;
            info!("drew random secret from {} words", vocabulary.len());
            (secret.clone(), true)
        }
    };

    let score = score(&secret, &guess);

    Ok(ScoreResult {
        secret,
        guess,
        score,
        random_secret,
    })
}

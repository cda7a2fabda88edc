//! Accumulated per-letter knowledge across several scored guesses
//!
//! Each letter keeps the strongest feedback it has received so far. A letter
//! that was once `Exact` stays `Exact` even if a later guess shows it `Absent`
//! at a duplicate position.

use super::feedback::{Feedback, FeedbackPattern};
use super::word::Word;
use std::collections::BTreeMap;

/// Best-known feedback per guessed letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStates {
    states: BTreeMap<u8, Feedback>,
}

impl LetterStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the known states, never downgrading
    pub fn record(&mut self, guess: &Word, pattern: &FeedbackPattern) {
        for (&letter, feedback) in guess.chars().iter().zip(pattern.iter()) {
            self.states
                .entry(letter)
                .and_modify(|known| *known = (*known).max(feedback))
                .or_insert(feedback);
        }
    }

    /// Best feedback seen for `letter`, or `None` if it was never guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Feedback> {
        self.states.get(&letter).copied()
    }

    /// Guessed letters in alphabetical order with their best feedback
    pub fn iter(&self) -> impl Iterator<Item = (char, Feedback)> + '_ {
        self.states
            .iter()
            .map(|(&letter, &feedback)| (char::from(letter), feedback))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    fn record(states: &mut LetterStates, secret: &str, guess: &str) {
        let guess = Word::new(guess).unwrap();
        let result = score(&Word::new(secret).unwrap(), &guess);
        states.record(&guess, &result.pattern);
    }

    #[test]
    fn empty_states() {
        let states = LetterStates::new();
        assert!(states.is_empty());
        assert_eq!(states.get(b'a'), None);
    }

    #[test]
    fn records_every_guessed_letter() {
        let mut states = LetterStates::new();
        record(&mut states, "charm", "crane");

        assert_eq!(states.len(), 5);
        assert_eq!(states.get(b'c'), Some(Feedback::Exact));
        assert_eq!(states.get(b'r'), Some(Feedback::Present));
        assert_eq!(states.get(b'n'), Some(Feedback::Absent));
        assert_eq!(states.get(b'z'), None);
    }

    #[test]
    fn never_downgrades() {
        let mut states = LetterStates::new();
        // 'e' exact at position 2, absent at position 4
        record(&mut states, "creep", "geese");
        assert_eq!(states.get(b'e'), Some(Feedback::Exact));

        // A later guess showing 'e' only as present changes nothing
        record(&mut states, "creep", "fable");
        assert_eq!(states.get(b'e'), Some(Feedback::Exact));
    }

    #[test]
    fn upgrades_from_present_to_exact() {
        let mut states = LetterStates::new();
        record(&mut states, "charm", "crane");
        assert_eq!(states.get(b'r'), Some(Feedback::Present));

        record(&mut states, "charm", "shirt");
        assert_eq!(states.get(b'r'), Some(Feedback::Exact));
    }

    #[test]
    fn iterates_alphabetically() {
        let mut states = LetterStates::new();
        record(&mut states, "charm", "crane");
        let letters: String = states.iter().map(|(c, _)| c).collect();
        assert_eq!(letters, "acenr");
    }
}

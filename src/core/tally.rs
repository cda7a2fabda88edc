//! Per-letter occurrence counter used while scoring
//!
//! One slot per letter `a..=z`. Letters outside that range have no slot, so
//! every access is bounds-checked through [`slot`] instead of trusting
//! `letter - b'a'`.

const ALPHABET_SIZE: usize = 26;

/// Map a letter to its tally slot, or `None` outside `a..=z`
#[inline]
fn slot(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}

/// Remaining-occurrence count for each of the 26 letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterTally([u8; ALPHABET_SIZE]);

impl LetterTally {
    #[must_use]
    pub const fn new() -> Self {
        Self([0; ALPHABET_SIZE])
    }

    /// Record one more occurrence of `letter`
    ///
    /// Letters outside `a..=z` are ignored.
    pub fn add(&mut self, letter: u8) {
        if let Some(count) = slot(letter).and_then(|i| self.0.get_mut(i)) {
            *count = count.saturating_add(1);
        }
    }

    /// Remaining occurrences of `letter` (0 for letters outside `a..=z`)
    #[must_use]
    pub fn remaining(&self, letter: u8) -> u8 {
        slot(letter).and_then(|i| self.0.get(i)).copied().unwrap_or(0)
    }

    /// Consume one occurrence of `letter`
    ///
    /// Returns `false` (and changes nothing) if none remain.
    pub fn take(&mut self, letter: u8) -> bool {
        match slot(letter).and_then(|i| self.0.get_mut(i)) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Total occurrences across all letters
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| usize::from(c)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tally() {
        let tally = LetterTally::new();
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.remaining(b'a'), 0);
        assert_eq!(tally, LetterTally::default());
    }

    #[test]
    fn add_and_take() {
        let mut tally = LetterTally::new();
        tally.add(b'e');
        tally.add(b'e');
        tally.add(b'z');

        assert_eq!(tally.remaining(b'e'), 2);
        assert_eq!(tally.remaining(b'z'), 1);
        assert_eq!(tally.total(), 3);

        assert!(tally.take(b'e'));
        assert!(tally.take(b'e'));
        assert!(!tally.take(b'e'));
        assert_eq!(tally.remaining(b'e'), 0);
        assert_eq!(tally.total(), 1);
    }

    #[test]
    fn letters_outside_alphabet_have_no_slot() {
        let mut tally = LetterTally::new();
        tally.add(b'A');
        tally.add(b'{');
        tally.add(b'`');

        assert_eq!(tally.total(), 0);
        assert_eq!(tally.remaining(b'A'), 0);
        assert!(!tally.take(b'{'));
    }

    #[test]
    fn alphabet_edges() {
        assert_eq!(slot(b'a'), Some(0));
        assert_eq!(slot(b'z'), Some(25));
        assert_eq!(slot(b'`'), None);
        assert_eq!(slot(b'{'), None);
    }
}

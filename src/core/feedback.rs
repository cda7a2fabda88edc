//! Per-letter feedback and the 5-symbol feedback pattern
//!
//! A pattern has one symbol per guess position:
//! - `Exact`   = letter is in the secret at this position (green)
//! - `Present` = letter is elsewhere in the secret (yellow)
//! - `Absent`  = no unmatched occurrence left in the secret (gray)

use super::word::WORD_LENGTH;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Feedback for a single letter position
///
/// Variants are ordered by how much they reveal: `Absent < Present < Exact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Exact,
}

impl Feedback {
    /// Single-letter code: `g` (Exact), `y` (Present), `x` (Absent)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => 'g',
            Self::Present => 'y',
            Self::Absent => 'x',
        }
    }

    /// Square emoji for this feedback
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse one feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for exact
    /// - 'Y'/'y'/🟨 for present
    /// - 'X'/'x'/'-'/'_'/⬜ for absent
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'X' | 'x' | '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Error returned when parsing a feedback pattern string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternParseError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for PatternParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Pattern must have exactly {WORD_LENGTH} symbols, got {len}")
            }
            Self::InvalidSymbol(ch) => write!(f, "Invalid pattern symbol {ch:?}"),
        }
    }
}

impl std::error::Error for PatternParseError {}

/// Feedback for a whole guess, one symbol per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern([Feedback; WORD_LENGTH]);

impl FeedbackPattern {
    /// All positions exact
    pub const PERFECT: Self = Self([Feedback::Exact; WORD_LENGTH]);

    /// All positions absent
    pub const ALL_ABSENT: Self = Self([Feedback::Absent; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(symbols: [Feedback; WORD_LENGTH]) -> Self {
        Self(symbols)
    }

    /// The per-position symbols
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is exact
    #[inline]
    #[must_use]
    pub fn is_exact_match(&self) -> bool {
        self.0.iter().all(|&f| f == Feedback::Exact)
    }

    /// Count positions carrying the given feedback
    #[must_use]
    pub fn count(&self, feedback: Feedback) -> usize {
        self.0.iter().filter(|&&f| f == feedback).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = Feedback> + '_ {
        self.0.iter().copied()
    }

    /// Convert to the letter-code form, e.g. `"gyxxg"`
    ///
    /// # Examples
    /// ```
    /// use wordle_scorer::core::{Feedback, FeedbackPattern};
    ///
    /// let p = FeedbackPattern::new([
    ///     Feedback::Exact,
    ///     Feedback::Present,
    ///     Feedback::Absent,
    ///     Feedback::Absent,
    ///     Feedback::Exact,
    /// ]);
    /// assert_eq!(p.to_codes(), "gyxxg");
    /// ```
    #[must_use]
    pub fn to_codes(&self) -> String {
        self.0.iter().map(|f| f.code()).collect()
    }

    /// Convert to an emoji row, e.g. `"🟩🟨⬜⬜🟩"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl Index<usize> for FeedbackPattern {
    type Output = Feedback;

    fn index(&self, position: usize) -> &Self::Output {
        &self.0[position]
    }
}

impl FromStr for FeedbackPattern {
    type Err = PatternParseError;

    /// Parse a pattern from a string like "gyxxg", "GY-_G" or "🟩🟨⬜⬜🟩"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != WORD_LENGTH {
            return Err(PatternParseError::InvalidLength(len));
        }

        let mut symbols = [Feedback::Absent; WORD_LENGTH];
        for (slot, ch) in symbols.iter_mut().zip(s.chars()) {
            *slot = Feedback::from_symbol(ch).ok_or(PatternParseError::InvalidSymbol(ch))?;
        }

        Ok(Self(symbols))
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_codes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_ordering() {
        assert!(Feedback::Absent < Feedback::Present);
        assert!(Feedback::Present < Feedback::Exact);
    }

    #[test]
    fn perfect_constant() {
        assert!(FeedbackPattern::PERFECT.is_exact_match());
        assert_eq!(FeedbackPattern::PERFECT.count(Feedback::Exact), 5);
        assert!(!FeedbackPattern::ALL_ABSENT.is_exact_match());
        assert_eq!(FeedbackPattern::ALL_ABSENT.count(Feedback::Absent), 5);
    }

    #[test]
    fn parse_codes_and_emoji_agree() {
        let p1: FeedbackPattern = "gy-xg".parse().unwrap();
        let p2: FeedbackPattern = "🟩🟨⬜⬜🟩".parse().unwrap();
        let p3: FeedbackPattern = "GY_XG".parse().unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.to_codes(), "gyxxg");
        assert_eq!(p1.to_emoji(), "🟩🟨⬜⬜🟩");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            "gyx".parse::<FeedbackPattern>(),
            Err(PatternParseError::InvalidLength(3))
        );
        assert_eq!(
            "gyxxq".parse::<FeedbackPattern>(),
            Err(PatternParseError::InvalidSymbol('q'))
        );
    }

    #[test]
    fn index_and_iter() {
        let p: FeedbackPattern = "xyggx".parse().unwrap();
        assert_eq!(p[0], Feedback::Absent);
        assert_eq!(p[1], Feedback::Present);
        assert_eq!(p[2], Feedback::Exact);
        assert_eq!(p.iter().filter(|&f| f == Feedback::Exact).count(), 2);
        assert_eq!(p.count(Feedback::Present), 1);
    }

    #[test]
    fn display_uses_codes() {
        let p: FeedbackPattern = "🟨🟨🟩⬜⬜".parse().unwrap();
        assert_eq!(p.to_string(), "yygxx");
    }
}

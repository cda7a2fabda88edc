//! Core domain types for word scoring
//!
//! Pure types and functions with no I/O: words, feedback patterns, the
//! per-letter tally and the scorer built on them.

mod feedback;
mod letters;
mod scorer;
mod tally;
mod word;

pub use feedback::{Feedback, FeedbackPattern, PatternParseError};
pub use letters::LetterStates;
pub use scorer::{Score, partition, score, score_against, score_words};
pub use tally::LetterTally;
pub use word::{WORD_LENGTH, Word, WordError};

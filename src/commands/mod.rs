//! Command implementations

pub mod check;
pub mod letters;
pub mod score;
pub mod spread;

pub use check::{CheckResult, check_word};
pub use letters::{LettersResult, collect_letters};
pub use score::{ScoreConfig, ScoreResult, score_guess};
pub use spread::{SpreadResult, spread_guess};

//! Wordle Scorer
//!
//! Feedback scoring for Wordle-style guesses with exact duplicate-letter
//! handling, plus vocabulary loading and guess validation.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_scorer::core::{Word, score};
//!
//! let secret = Word::new("rarer").unwrap();
//! let guess = Word::new("rorro").unwrap();
//!
//! let result = score(&secret, &guess);
//! assert_eq!(result.pattern.to_codes(), "gxgyx");
//! assert!(!result.is_exact_match);
//! ```

// Core domain types and scoring
pub mod core;

// Word lists and guess validation
pub mod vocabulary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

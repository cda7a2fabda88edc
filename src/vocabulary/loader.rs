//! Word list loading
//!
//! A word list holds one word per line. Surrounding whitespace and blank
//! lines are ignored; anything else that is not a single valid word fails the
//! whole load. No partial vocabulary is ever returned.

use super::Vocabulary;
use crate::core::{Word, WordError};
use log::{debug, warn};
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error loading a vocabulary
#[derive(Debug)]
pub enum VocabularyError {
    /// The word list could not be opened or read
    Io { path: PathBuf, source: io::Error },
    /// A line held a token that is not a valid word
    InvalidWord {
        line: usize,
        token: String,
        source: WordError,
    },
    /// A line held more than one token
    ExtraTokens { line: usize },
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::InvalidWord {
                line,
                token,
                source,
            } => write!(f, "Line {line}: invalid word {token:?}: {source}"),
            Self::ExtraTokens { line } => write!(f, "Line {line}: expected one word per line"),
        }
    }
}

impl std::error::Error for VocabularyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidWord { source, .. } => Some(source),
            Self::ExtraTokens { .. } => None,
        }
    }
}

/// Load a vocabulary from a file
///
/// # Errors
///
/// Returns `VocabularyError::Io` if the file cannot be opened or read, and a
/// line-numbered error for the first malformed line.
///
/// # Examples
/// ```no_run
/// use wordle_scorer::vocabulary::load_from_file;
///
/// let vocabulary = load_from_file("vocabulary.txt").unwrap();
/// println!("Loaded {} words", vocabulary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vocabulary, VocabularyError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let vocabulary = parse_words(&content)?;
    debug!("loaded {} words from {}", vocabulary.len(), path.display());
    Ok(vocabulary)
}

/// Parse word-list text into a vocabulary, keeping line order
///
/// # Errors
///
/// Returns a line-numbered `VocabularyError` for the first line that is not
/// blank and not exactly one valid word.
pub fn parse_words(content: &str) -> Result<Vocabulary, VocabularyError> {
    let mut words = Vec::new();
    let mut seen = FxHashSet::default();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        let mut tokens = line.split_whitespace();

        let Some(token) = tokens.next() else {
            continue;
        };
        if tokens.next().is_some() {
            return Err(VocabularyError::ExtraTokens { line: line_number });
        }

        let word = Word::new(token).map_err(|source| VocabularyError::InvalidWord {
            line: line_number,
            token: token.to_string(),
            source,
        })?;

        if !seen.insert(word.text().to_string()) {
            warn!("duplicate word {word:?} on line {line_number}");
        }
        words.push(word);
    }

    Ok(Vocabulary::new(words))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_list(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn texts(vocabulary: &Vocabulary) -> Vec<&str> {
        vocabulary.iter().map(Word::text).collect()
    }

    #[test]
    fn load_preserves_file_order() {
        let file = write_list("crane\nslate\nirate\n");
        let vocabulary = load_from_file(file.path()).unwrap();

        assert_eq!(vocabulary.len(), 3);
        assert_eq!(texts(&vocabulary), ["crane", "slate", "irate"]);
    }

    #[test]
    fn load_without_trailing_newline() {
        let file = write_list("apple\nmango");
        let vocabulary = load_from_file(file.path()).unwrap();
        assert_eq!(texts(&vocabulary), ["apple", "mango"]);
    }

    #[test]
    fn empty_file_is_empty_vocabulary() {
        let file = write_list("");
        let vocabulary = load_from_file(file.path()).unwrap();
        assert!(vocabulary.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = load_from_file(&path).unwrap_err();
        assert!(matches!(err, VocabularyError::Io { .. }));
        assert!(err.to_string().contains("missing.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn whitespace_and_blank_lines_are_ignored() {
        let vocabulary = parse_words("  crane \r\n\n\t\nslate\t\n   \n").unwrap();
        assert_eq!(texts(&vocabulary), ["crane", "slate"]);
    }

    #[test]
    fn long_token_is_rejected_not_truncated() {
        let err = parse_words("crane\nslates\n").unwrap_err();
        match err {
            VocabularyError::InvalidWord {
                line,
                token,
                source,
            } => {
                assert_eq!(line, 2);
                assert_eq!(token, "slates");
                assert_eq!(source, WordError::InvalidLength(6));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_letters_are_rejected() {
        let err = parse_words("crane\nsl4te\n").unwrap_err();
        assert!(matches!(
            err,
            VocabularyError::InvalidWord {
                line: 2,
                source: WordError::InvalidAlphabet('4'),
                ..
            }
        ));
    }

    #[test]
    fn two_tokens_on_a_line_are_rejected() {
        let err = parse_words("crane\n\nslate irate\n").unwrap_err();
        assert!(matches!(err, VocabularyError::ExtraTokens { line: 3 }));
        assert_eq!(err.to_string(), "Line 3: expected one word per line");
    }

    #[test]
    fn duplicates_are_kept() {
        let vocabulary = parse_words("crane\ncrane\n").unwrap();
        assert_eq!(vocabulary.len(), 2);
    }
}

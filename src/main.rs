//! Wordle Scorer - CLI
//!
//! Scores guesses, validates them against a vocabulary and shows how a guess
//! splits the vocabulary into feedback patterns.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use std::path::Path;
use wordle_scorer::{
    commands::{ScoreConfig, check_word, collect_letters, score_guess, spread_guess},
    output::{print_check_result, print_letters_result, print_score_result, print_spread_result},
    vocabulary::{Vocabulary, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_scorer",
    about = "Score Wordle guesses with exact duplicate-letter handling",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list with one 5-letter word per line
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "WORDLE_VOCABULARY",
        default_value = "vocabulary.txt"
    )]
    vocabulary: String,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a guess against a secret
    Score {
        /// The guessed word
        guess: String,

        /// The secret word (drawn from the vocabulary if omitted)
        secret: Option<String>,

        /// Reject guesses that are not in the vocabulary
        #[arg(short, long)]
        check: bool,

        /// Show a randomly drawn secret
        #[arg(short, long)]
        reveal: bool,
    },

    /// Check whether a word is a legal guess
    Check {
        /// Word to check
        word: String,
    },

    /// Show how a guess splits the vocabulary into feedback patterns
    Spread {
        /// The guessed word
        guess: String,

        /// Number of patterns to list
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Score several guesses against one secret and summarise letter knowledge
    Letters {
        /// The secret word
        secret: String,

        /// Guesses, in order
        #[arg(required = true)]
        guesses: Vec<String>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn load_vocabulary(path: &str) -> Result<Vocabulary> {
    load_from_file(Path::new(path)).with_context(|| format!("Could not load vocabulary '{path}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Score {
            guess,
            secret,
            check,
            reveal,
        } => run_score_command(&cli.vocabulary, &guess, secret.as_deref(), check, reveal),
        Commands::Check { word } => run_check_command(&cli.vocabulary, &word),
        Commands::Spread { guess, top } => run_spread_command(&cli.vocabulary, &guess, top),
        Commands::Letters { secret, guesses } => run_letters_command(&secret, &guesses),
    }
}

fn run_score_command(
    vocabulary_path: &str,
    guess: &str,
    secret: Option<&str>,
    check: bool,
    reveal: bool,
) -> Result<()> {
    // Input is folded to lowercase here; the library itself is case-sensitive
    let config = ScoreConfig::new(
        guess.trim().to_lowercase(),
        secret.map(|s| s.trim().to_lowercase()),
    )
    .with_check(check);

    let vocabulary = if config.needs_vocabulary() {
        load_vocabulary(vocabulary_path)?
    } else {
        debug!("secret given without --check, skipping vocabulary load");
        Vocabulary::default()
    };

    let result =
        score_guess(config, &vocabulary, &mut rand::rng()).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result, reveal);
    Ok(())
}

fn run_check_command(vocabulary_path: &str, word: &str) -> Result<()> {
    let vocabulary = load_vocabulary(vocabulary_path)?;
    let result = check_word(&word.trim().to_lowercase(), &vocabulary);
    print_check_result(&result);

    if result.is_valid() {
        Ok(())
    } else {
        anyhow::bail!("'{}' is not a valid guess", result.word)
    }
}

fn run_spread_command(vocabulary_path: &str, guess: &str, top: usize) -> Result<()> {
    let vocabulary = load_vocabulary(vocabulary_path)?;
    let result =
        spread_guess(&guess.trim().to_lowercase(), &vocabulary).map_err(|e| anyhow::anyhow!(e))?;
    print_spread_result(&result, top);
    Ok(())
}

fn run_letters_command(secret: &str, guesses: &[String]) -> Result<()> {
    let guesses: Vec<String> = guesses.iter().map(|g| g.trim().to_lowercase()).collect();
    let result =
        collect_letters(&secret.trim().to_lowercase(), &guesses).map_err(|e| anyhow::anyhow!(e))?;
    print_letters_result(&result);
    Ok(())
}

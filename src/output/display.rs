//! Display functions for command results

use super::formatters::{create_progress_bar, tile, tile_row};
use crate::commands::{CheckResult, LettersResult, ScoreResult, SpreadResult};
use colored::Colorize;

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult, reveal_secret: bool) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess: {}   {}",
        result.guess.text().to_uppercase().bright_yellow().bold(),
        result.score.pattern.to_emoji()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", tile_row(&result.guess, &result.score.pattern));
    println!("\n  Codes: {}", result.score.pattern.to_codes());

    if !result.random_secret || reveal_secret {
        println!("  Secret: {}", result.secret.text().to_uppercase());
    }

    println!();
    if result.score.is_exact_match {
        println!("{}", "✅ Exact match!".green().bold());
    } else {
        println!("{}", "❌ Not a match".red().bold());
    }
}

/// Print the result of checking a guess
pub fn print_check_result(result: &CheckResult) {
    if let Some(reason) = &result.malformed {
        println!(
            "{} '{}': {reason}",
            "✗ Malformed".red().bold(),
            result.word
        );
    } else if result.in_vocabulary {
        println!(
            "{} '{}' is in the vocabulary ({} words)",
            "✓ Valid".green().bold(),
            result.word,
            result.vocabulary_size
        );
    } else {
        println!(
            "{} '{}' is not in the vocabulary ({} words)",
            "✗ Unknown".yellow().bold(),
            result.word,
            result.vocabulary_size
        );
    }
}

/// Print the largest feedback buckets for a guess
pub fn print_spread_result(result: &SpreadResult, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PATTERN SPREAD:".bright_cyan().bold(),
        result.guess.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} secrets, {} distinct patterns, worst case {}",
        result.total_secrets,
        result.distinct_patterns(),
        result.largest_bucket()
    );

    let largest = result.largest_bucket() as f64;
    for (pattern, count) in result.buckets.iter().take(top) {
        let bar = create_progress_bar(*count as f64, largest, 30);
        println!("   {} {} {count:5}", pattern.to_emoji(), bar.green());
    }

    if result.buckets.len() > top {
        println!(
            "   {}",
            format!("… {} more patterns", result.buckets.len() - top).bright_black()
        );
    }
}

/// Print scored rows and the accumulated letter knowledge
pub fn print_letters_result(result: &LettersResult) {
    println!();
    for (turn, (guess, score)) in result.rows.iter().enumerate() {
        println!("  {}: {}", turn + 1, tile_row(guess, &score.pattern));
    }

    println!("\n🔤 {}", "Letters:".bright_cyan().bold());
    let row: Vec<String> = result
        .states
        .iter()
        .map(|(letter, feedback)| tile(letter, feedback).to_string())
        .collect();
    println!("   {}", row.join(" "));

    if result.rows.iter().any(|(_, score)| score.is_exact_match) {
        println!(
            "\n{}",
            format!("✅ Secret {} found", result.secret.text().to_uppercase())
                .green()
                .bold()
        );
    }
}

//! Display functions for command results

use super::formatters::{max_corpus_score, percent_of_max, score_bar};
use crate::commands::{FirstWordsReport, SecondWordsReport};
use crate::wordlists::{Corpora, WordSource};
use colored::Colorize;

const BAR_WIDTH: usize = 30;

/// Print how many words each list holds
pub fn print_corpus_summary(corpora: &Corpora, answers: &WordSource, guesses: &WordSource) {
    println!("{answers} has {} words", corpora.answers.len());
    println!("{guesses} has {} words", corpora.guesses.len());
    println!(
        "{}",
        format!("{} candidate guesses", corpora.candidates.len()).bright_black()
    );
}

/// Print the best first words
pub fn print_first_words(report: &FirstWordsReport) {
    let max = max_corpus_score(report.answer_count);

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "Words and scores for top first words:".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (word, score) in report.top.iter() {
        println!(
            "{} {}  [{}] {:.1}%",
            word.text().bright_yellow().bold(),
            score,
            score_bar(score, max, BAR_WIDTH).green(),
            percent_of_max(score, max)
        );
    }

    print_footer(report.candidate_count, report.answer_count, report.duration);
}

/// Print the best first words, each followed by its best second words
pub fn print_opener_pairs(report: &SecondWordsReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ",
        "Words and scores for top first words and second words:"
            .bright_cyan()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for pair in &report.pairs {
        println!(
            "{} {}",
            pair.first.text().bright_yellow().bold(),
            pair.first_score
        );
        let seconds: Vec<String> = pair
            .seconds
            .iter()
            .map(|(word, score)| format!("{} {score}", word.text().green()))
            .collect();
        println!("   {}", seconds.join("   "));
    }

    print_footer(report.candidate_count, report.answer_count, report.duration);
}

fn print_footer(candidates: usize, answers: usize, duration: std::time::Duration) {
    println!(
        "\n{}",
        format!(
            "Scored {candidates} candidates against {answers} answers in {:.2}s",
            duration.as_secs_f64()
        )
        .bright_black()
    );
}

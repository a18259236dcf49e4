//! Display functions for command results

use super::formatters::{count_bar, side_label};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of a single prefix query
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Prefix: {}   Side: {}",
        if result.prefix.is_empty() {
            "(empty)".to_string()
        } else {
            result.prefix.to_uppercase()
        }
        .bright_yellow()
        .bold(),
        side_label(result.first_mover_is_caller).bright_cyan()
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        println!(
            "  Dictionary: {} words, {} tree nodes",
            result.dictionary_size, result.tree_nodes
        );
    }

    println!();
    match result.solution.winning_word() {
        Some(word) => {
            println!(
                "{}",
                format!("✅ Forced win: {}", word.to_uppercase())
                    .green()
                    .bold()
            );
        }
        None => {
            println!("{}", "❌ No winning word".red().bold());
        }
    }
}

/// Print the result of an opening analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "OPENING ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} words, {} legal openings, {} winning for the first mover\n",
        result.dictionary_size,
        result.openings.len(),
        result.winning_openings.to_string().bright_yellow().bold()
    );

    let max_count = result
        .openings
        .iter()
        .map(|o| o.word_count)
        .max()
        .unwrap_or(0);

    for opening in &result.openings {
        let bar = count_bar(opening.word_count, max_count, 20);
        let verdict = if opening.first_mover_wins {
            format!(
                "win via {}",
                opening.winning_word.as_deref().unwrap_or("?").to_uppercase()
            )
            .green()
        } else {
            "loss".red()
        };
        println!(
            "   {}: {} {:3} words  {}",
            opening.letter.to_ascii_uppercase(),
            bar.bright_black(),
            opening.word_count,
            verdict
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Queries:          {}", result.total_queries);
    println!(
        "   Forced wins:      {}",
        result.wins.to_string().green()
    );
    println!(
        "   No forced win:    {}",
        result.no_wins.to_string().yellow()
    );
    println!("   Prefix not found: {}", result.prefixes_not_found);
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second);

    if !result.win_length_distribution.is_empty() {
        println!("\n📈 {}", "Winning word lengths:".bright_cyan().bold());

        let mut lengths: Vec<_> = result.win_length_distribution.iter().collect();
        lengths.sort_unstable();
        let max_count = lengths.iter().map(|&(_, &c)| c).max().unwrap_or(0);

        for (length, &count) in lengths {
            let bar = count_bar(count, max_count, 30);
            println!("   {length:2}: {} {count:4}", bar.green());
        }
    }
}

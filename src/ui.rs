//! Terminal presentation: banner, sections, result blocks.
//!
//! Every formatting function is pure and takes the terminal width as an
//! argument; the width is measured once per render at the call site. This
//! keeps layout testable and means a degraded result renders through
//! exactly the same path as a successful one.

use colored::Colorize;
use console::Term;
use findwhat_search::EnrichedResult;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Narrowest layout we will attempt; anything smaller renders at this width.
const MIN_WIDTH: usize = 40;

/// Measure the terminal width, falling back to 80 columns when the
/// output is not a terminal.
pub fn terminal_width() -> usize {
    Term::stdout()
        .size_checked()
        .map(|(_rows, cols)| cols as usize)
        .unwrap_or(80)
        .max(MIN_WIDTH)
}

fn rule(width: usize) -> String {
    "─".repeat(width.max(MIN_WIDTH))
}

/// The application banner shown before any other output.
pub fn banner(width: usize) -> String {
    format!(
        "\n{}\n{} {} {}\n{}\n{}",
        rule(width).magenta(),
        "★".magenta(),
        "FINDWHAT".cyan().bold(),
        "🌐".normal(),
        "Keyword web search with page previews, from the terminal"
            .green(),
        rule(width).magenta(),
    )
}

/// A section heading with full-width rules above and below.
pub fn section(title: &str, width: usize) -> String {
    format!(
        "\n{}\n{} {}\n{}",
        rule(width).magenta(),
        "→".green(),
        title.cyan().bold(),
        rule(width).magenta(),
    )
}

/// The closing lines printed once a run finishes.
pub fn footer(width: usize) -> String {
    format!(
        "\n{}\n{}\n{}\n",
        rule(width).magenta(),
        "✅ Search completed.".green(),
        rule(width).magenta(),
    )
}

/// One result block: numbered title, URL, wrapped description, rule.
pub fn format_result(result: &EnrichedResult, width: usize) -> String {
    let mut block = String::new();
    block.push_str(&format!(
        "\n{}\n",
        format!("• Result #{}: {}", result.rank, result.title)
            .cyan()
            .bold()
    ));
    block.push_str(&format!("{}\n", format!("  🔗 {}", result.url).blue()));
    for line in wrap(&result.description, width, 2) {
        block.push_str(&format!("{line}\n"));
    }
    block.push_str(&format!("{}", rule(width).magenta()));
    block
}

/// Greedy word wrap with a fixed indent, counting characters not bytes.
/// A single word longer than the available width keeps its own overlong
/// line rather than being split.
pub fn wrap(text: &str, width: usize, indent: usize) -> Vec<String> {
    let available = width.saturating_sub(indent).max(10);
    let pad = " ".repeat(indent);

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_owned();
        } else if current.chars().count() + 1 + word.chars().count() <= available {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(format!("{pad}{current}"));
            current = word.to_owned();
        }
    }
    if !current.is_empty() {
        lines.push(format!("{pad}{current}"));
    }
    lines
}

/// A steady-tick spinner used while a pipeline phase runs.
pub fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

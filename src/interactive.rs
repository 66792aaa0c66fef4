//! Interactive mode: pick results by number and open them in the browser.

use crate::browser;
use colored::Colorize;
use dialoguer::Input;
use findwhat_search::ResultSet;

/// What the user asked for at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Open the result with this 1-based rank.
    Open(usize),
    /// Leave interactive mode.
    Exit,
    /// Anything else.
    Invalid,
}

/// Interpret one line of input against a result list of length `max`.
/// Accepts a 1-based result number or the word `exit` in any case.
pub fn parse_choice(input: &str, max: usize) -> Choice {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("exit") {
        return Choice::Exit;
    }
    match trimmed.parse::<usize>() {
        Ok(number) if (1..=max).contains(&number) => Choice::Open(number),
        _ => Choice::Invalid,
    }
}

/// Prompt until the user exits. Each valid number opens that result's URL;
/// open failures are reported and the loop continues.
pub fn run_loop(results: &ResultSet) -> dialoguer::Result<()> {
    println!(
        "{}",
        format!(
            "Enter a result number (1-{}) to open it, or 'exit' to quit.",
            results.len()
        )
        .green()
    );

    loop {
        let input: String = Input::new()
            .with_prompt("→ Your choice")
            .allow_empty(true)
            .interact_text()?;

        match parse_choice(&input, results.len()) {
            Choice::Exit => break,
            Choice::Open(number) => {
                let result = &results[number - 1];
                println!("{}", format!("🚀 Opening: {}", result.url).green());
                if let Err(err) = browser::open_url(&result.url) {
                    println!(
                        "{}",
                        format!("⚠️  Could not open {}: {err}", result.url).yellow()
                    );
                }
            }
            Choice::Invalid => {
                println!("{}", "Invalid choice, please try again.".yellow());
            }
        }
    }
    Ok(())
}

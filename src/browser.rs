//! Opening result URLs in the system browser.

use colored::Colorize;
use findwhat_search::ResultSet;
use std::io;
use std::process::{Command, Stdio};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::warn;

/// Pause between automatic opens so the browser is not flooded with tabs.
const OPEN_DELAY: Duration = Duration::from_millis(1500);

/// The platform launcher command and its leading arguments.
fn opener() -> (&'static str, &'static [&'static str]) {
    #[cfg(target_os = "macos")]
    {
        ("open", &[])
    }
    #[cfg(target_os = "windows")]
    {
        ("cmd", &["/C", "start", ""])
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        ("xdg-open", &[])
    }
}

/// Hand `url` to the platform launcher. The launcher itself returns as
/// soon as the browser has accepted the URL, so waiting on it is cheap.
pub fn open_url(url: &str) -> io::Result<()> {
    let (program, args) = opener();
    let status = Command::new(program)
        .args(args)
        .arg(url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("{program} exited with {status}")))
    }
}

/// Open every result in rank order with a delay between opens. A failed
/// open is reported and skipped; cancellation stops the remaining opens.
pub async fn open_all(results: &ResultSet, cancel: &CancellationToken, quiet: bool) {
    for (index, result) in results.iter().enumerate() {
        if cancel.is_cancelled() {
            break;
        }
        if !quiet {
            println!("{}", format!("🚀 Opening: {}", result.url).green());
        }
        if let Err(err) = open_url(&result.url) {
            warn!(url = %result.url, error = %err, "failed to open result in browser");
            if !quiet {
                println!("{}", format!("⚠️  Could not open {}: {err}", result.url).yellow());
            }
        }
        if index + 1 < results.len() {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(OPEN_DELAY) => {}
            }
        }
    }
}

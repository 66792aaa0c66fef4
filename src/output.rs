//! Result serialisation: the plain-text save format and JSON output.

use findwhat_search::ResultSet;
use std::path::Path;

/// Render the result set in the plain-text save format: one block per
/// result, in rank order, separated by an 80-dash rule.
pub fn to_plain(results: &ResultSet) -> String {
    let mut out = String::new();
    for result in results {
        out.push_str(&format!(
            "{} - {}\n{}\n{}\n",
            result.title,
            result.url,
            result.description,
            "-".repeat(80),
        ));
    }
    out
}

/// Write the plain-text rendering to `path`, replacing any existing file.
pub fn save_plain(results: &ResultSet, path: &Path) -> std::io::Result<()> {
    std::fs::write(path, to_plain(results))
}

/// Render the result set as pretty-printed JSON.
pub fn to_json(results: &ResultSet) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

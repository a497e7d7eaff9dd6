use std::fmt::Write;

use crate::data_models::Platform;
use crate::search::{SearchError, SearchOutcome};

/// Plain-text rendering of a search, grouped by platform.
pub fn render_outcome(outcome: &SearchOutcome) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}: {}", outcome.notice.title, outcome.notice.description);
    let variations = outcome.expansion.variations();
    if !variations.is_empty() {
        let _ = writeln!(out, "Suggested variations: {}", variations.join(", "));
    }
    out.push('\n');

    if outcome.results.is_empty() {
        let _ = writeln!(
            out,
            "No results found for \"{}\" on the selected platforms.",
            outcome.query
        );
    } else {
        let _ = writeln!(out, "Search Results for \"{}\"", outcome.query);
        for item in &outcome.results {
            let _ = writeln!(out, "\n{}", item.platform.name);
            for link in &item.links {
                let _ = writeln!(out, "  {}\n    {}", link.label(), link.url);
            }
        }
    }

    let _ = write!(
        out,
        "\n{}: {}",
        outcome.completion.title, outcome.completion.description
    );
    out
}

/// One-line message for a search that was rejected before any work.
pub fn render_failure(err: &SearchError) -> String {
    format!("Search failed: {err}")
}

pub fn render_platforms(platforms: &[Platform]) -> String {
    let width = platforms.iter().map(|p| p.id.len()).max().unwrap_or(0);
    platforms
        .iter()
        .map(|p| format!("{:width$}  {}", p.id, p.name, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

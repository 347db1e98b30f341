/*!
 * Text rendering for filter logs and console excerpts.
 */

use std::fmt::Write;

use super::classifier::{FilterMode, LineRecord};
use super::summary::FilterSummary;

/// Width of the separator rule under log headers
const RULE_WIDTH: usize = 60;

/// Render the log file body for a filter run.
///
/// Every mode uses the same layout: a header with totals, the
/// per-category breakdown, then the retained examples of each non-empty
/// category as `Line <number>: <text>`.
pub fn render_log(summary: &FilterSummary) -> String {
    let mut out = String::new();
    let title = match summary.mode {
        FilterMode::Strict => "STRICT FILTER STATISTICS",
        FilterMode::Legacy => "REMOVED LATIN LINES",
        FilterMode::Quick => "QUICK FILTER STATISTICS",
    };

    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "Total lines: {}", summary.total_lines);
    let _ = writeln!(out, "Kept lines: {}", summary.kept);
    let _ = writeln!(out, "Total removed: {}", summary.removed());
    out.push('\n');

    let _ = writeln!(out, "Removed by category:");
    for (index, stats) in summary.categories.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}: {}", index + 1, stats.reason, stats.count);
    }

    for stats in summary.categories.iter().filter(|s| !s.examples.is_empty()) {
        out.push('\n');
        let _ = writeln!(out, "Examples removed ({}):", stats.reason.display_name().to_lowercase());
        for record in &stats.examples {
            let _ = writeln!(out, "  {}", format_record(record));
        }
    }

    out
}

/// Format a record as `Line <number>: <text>`
pub fn format_record(record: &LineRecord) -> String {
    format!("Line {}: {}", record.line_number, record.text)
}

/// Shorten text to at most `max_chars` characters, marking the cut with `...`
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}

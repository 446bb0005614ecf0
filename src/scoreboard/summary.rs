//! Textual rendering of ranked matches.
//!
//! Two renderings are provided:
//!
//! - **Rows**: one `"<home> <homeScore>:<awayScore> <away>"` line per match,
//!   paginated by `max_lines` / `start_from`.
//! - **Table**: a header plus column-aligned rows with zero-padded scores,
//!   followed by an ellipsis row when the board holds more matches than
//!   were rendered.
//!
//! ```text
//! HOME     SCORE  AWAY
//! Uruguay  06:06  Italy
//! Spain    10:02  Brazil
//! (...)
//! ```

use crate::config::TableLayout;
use crate::types::Match;

/// Host platform line separator
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";

/// Host platform line separator
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Marker appended to clipped team names
const CLIP_MARKER: &str = "...";

/// Select the page `[start_from, start_from + max_lines)` of `ranked`
///
/// Out-of-range pages are empty, never an error.
pub fn page<'a, T>(ranked: &'a [T], max_lines: usize, start_from: usize) -> &'a [T] {
    let start = start_from.min(ranked.len());
    let end = start.saturating_add(max_lines).min(ranked.len());
    &ranked[start..end]
}

/// Render summary rows for already-ranked matches
pub fn rows(matches: &[&Match]) -> Vec<String> {
    matches.iter().map(|m| m.summary_row()).collect()
}

/// Join rows with the host line separator (no trailing separator)
pub fn join_rows(rows: &[String]) -> String {
    rows.join(LINE_SEPARATOR)
}

// ============================================================================
// Table Rendering
// ============================================================================

/// Render a padded table of `shown` matches.
///
/// `hidden` is the number of ranked matches left out; when it is non-zero
/// the layout's ellipsis row is appended. An empty board renders as `""`.
pub fn table(shown: &[&Match], hidden: usize, layout: &TableLayout) -> String {
    if shown.is_empty() {
        return String::new();
    }

    let homes: Vec<String> = shown
        .iter()
        .map(|m| clip(m.home().as_str(), layout.max_column_width))
        .collect();
    let scores: Vec<String> = shown
        .iter()
        .map(|m| format!("{:02}:{:02}", m.home_score(), m.away_score()))
        .collect();
    let aways: Vec<String> = shown
        .iter()
        .map(|m| clip(m.away().as_str(), layout.max_column_width))
        .collect();

    let home_width = column_width(&layout.home_header, &homes, layout);
    let score_width = scores
        .iter()
        .map(|s| s.chars().count())
        .chain(std::iter::once(layout.score_header.chars().count()))
        .max()
        .unwrap_or(0);
    let gap = " ".repeat(layout.column_padding);

    let mut lines = Vec::with_capacity(shown.len() + 2);
    lines.push(table_line(
        &layout.home_header,
        &layout.score_header,
        &layout.away_header,
        home_width,
        score_width,
        &gap,
    ));
    for ((home, score), away) in homes.iter().zip(&scores).zip(&aways) {
        lines.push(table_line(home, score, away, home_width, score_width, &gap));
    }
    if hidden > 0 {
        lines.push(layout.ellipsis.clone());
    }

    lines.join(LINE_SEPARATOR)
}

fn table_line(
    home: &str,
    score: &str,
    away: &str,
    home_width: usize,
    score_width: usize,
    gap: &str,
) -> String {
    let line = format!(
        "{:<home_width$}{gap}{:^score_width$}{gap}{}",
        home, score, away
    );
    line.trim_end().to_string()
}

fn column_width(header: &str, cells: &[String], layout: &TableLayout) -> usize {
    let widest = cells
        .iter()
        .map(|c| c.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0);
    widest.max(layout.min_column_width)
}

/// Clip `name` to at most `max` characters, marking the cut with `...`
fn clip(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        return name.to_string();
    }
    let keep = max.saturating_sub(CLIP_MARKER.len());
    let mut clipped: String = name.chars().take(keep).collect();
    clipped.push_str(CLIP_MARKER);
    clipped
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_bounds() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(page(&items, 2, 0), &[1, 2]);
        assert_eq!(page(&items, 2, 4), &[5]);
        assert_eq!(page(&items, 10, 1), &[2, 3, 4, 5]);
        assert!(page(&items, 2, 5).is_empty());
        assert!(page(&items, 2, 100).is_empty());
        assert!(page(&items, 0, 0).is_empty());
        assert_eq!(page(&items, usize::MAX, 3), &[4, 5]);
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip("Spain", 10), "Spain");
        assert_eq!(clip("Netherlands", 11), "Netherlands");
        assert_eq!(clip("Netherlands", 8), "Nethe...");
        assert_eq!(clip("Ελλάδα-Ελλάδα", 6), "Ελλ...");
    }

    #[test]
    fn test_join_rows_has_no_trailing_separator() {
        let joined = join_rows(&["a".to_string(), "b".to_string()]);
        assert_eq!(joined, format!("a{}b", LINE_SEPARATOR));
        assert_eq!(join_rows(&[]), "");
    }
}

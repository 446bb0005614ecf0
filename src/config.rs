//! Scoreboard configuration.
//!
//! The score cap and page size are passed to the board at construction;
//! there is no process-wide mutable state.
//!
//! ## Example
//!
//! ```
//! use live_scoreboard::{Scoreboard, ScoreboardConfig};
//!
//! let config = ScoreboardConfig {
//!     max_score: 99,
//!     max_summary_lines: 5,
//!     ..Default::default()
//! };
//! let board = Scoreboard::with_config(config).unwrap();
//! assert_eq!(board.config().max_score, 99);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreboardError};

/// Default upper bound for a single team's score (inclusive)
pub const DEFAULT_MAX_SCORE: u32 = 1000;

/// Default page size for summaries
pub const DEFAULT_MAX_SUMMARY_LINES: usize = 20;

/// Construction-time options for a [`Scoreboard`](crate::Scoreboard)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreboardConfig {
    /// Upper bound per team per match (inclusive)
    pub max_score: u32,

    /// Default page size for `summary()`
    pub max_summary_lines: usize,

    /// Layout of `table_summary()`
    pub table: TableLayout,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            max_score: DEFAULT_MAX_SCORE,
            max_summary_lines: DEFAULT_MAX_SUMMARY_LINES,
            table: TableLayout::default(),
        }
    }
}

impl ScoreboardConfig {
    /// Check the options for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_summary_lines == 0 {
            return Err(ScoreboardError::InvalidConfig(
                "max_summary_lines must be at least 1".to_string(),
            ));
        }
        self.table.validate()
    }
}

/// Column layout for the padded table rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableLayout {
    /// Spaces between columns
    pub column_padding: usize,

    /// Team columns are at least this wide
    pub min_column_width: usize,

    /// Team names longer than this are clipped with `...`
    pub max_column_width: usize,

    pub home_header: String,
    pub away_header: String,
    pub score_header: String,

    /// Row appended when the board has more matches than were rendered
    pub ellipsis: String,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            column_padding: 2,
            min_column_width: 10,
            max_column_width: 30,
            home_header: "HOME".to_string(),
            away_header: "AWAY".to_string(),
            score_header: "SCORE".to_string(),
            ellipsis: "(...)".to_string(),
        }
    }
}

impl TableLayout {
    fn validate(&self) -> Result<()> {
        if self.max_column_width < 4 {
            return Err(ScoreboardError::InvalidConfig(
                "max_column_width must be at least 4".to_string(),
            ));
        }
        if self.min_column_width > self.max_column_width {
            return Err(ScoreboardError::InvalidConfig(format!(
                "min_column_width ({}) exceeds max_column_width ({})",
                self.min_column_width, self.max_column_width
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScoreboardConfig::default();
        assert_eq!(config.max_score, 1000);
        assert_eq!(config.max_summary_lines, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_summary_lines_rejected() {
        let config = ScoreboardConfig {
            max_summary_lines: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ScoreboardError::InvalidConfig(_)));
    }

    #[test]
    fn test_inverted_column_widths_rejected() {
        let mut config = ScoreboardConfig::default();
        config.table.min_column_width = 40;
        config.table.max_column_width = 20;
        assert!(config.validate().is_err());

        config.table.min_column_width = 0;
        config.table.max_column_width = 3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ScoreboardConfig =
            serde_json::from_str(r#"{ "max_score": 50, "table": { "ellipsis": "..." } }"#)
                .expect("Failed to parse config");

        assert_eq!(config.max_score, 50);
        assert_eq!(config.max_summary_lines, DEFAULT_MAX_SUMMARY_LINES);
        assert_eq!(config.table.ellipsis, "...");
        assert_eq!(config.table.home_header, "HOME");
    }
}

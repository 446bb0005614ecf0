//! # Live Scoreboard
//!
//! In-memory scoreboard for ongoing sports matches.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (TeamName, Match, MatchHandle)
//! - **Scoreboard**: Match lifecycle, membership check, ranked summaries
//! - **Config**: Score cap, page size, table layout
//!
//! ## Rules
//!
//! 1. **One match per team**: a team plays in at most one active match
//! 2. **Bounded scores**: every score is in `[0, max_score]`
//! 3. **Total ranking**: summaries rank by total score, newest match first
//!    among equal totals, so output is identical for identical boards
//! 4. **All or nothing**: a rejected operation leaves the board untouched
//!
//! ## Example
//!
//! ```
//! use live_scoreboard::Scoreboard;
//!
//! let mut board = Scoreboard::new();
//! board.start_match("Mexico", "Canada").unwrap();
//! board.start_match("Spain", "Brazil").unwrap();
//! board.update_match_score("Mexico", "Canada", 0, 5).unwrap();
//! board.update_match_score("Spain", "Brazil", 10, 2).unwrap();
//!
//! let rows = board.summary_rows(20, 0);
//! assert_eq!(rows, vec!["Spain 10:2 Brazil", "Mexico 0:5 Canada"]);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: TeamName, Match, MatchHandle
pub mod types;

/// Scoreboard: lifecycle, ranking, rendering
pub mod scoreboard;

/// Construction-time configuration
pub mod config;

/// Error types
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::{ScoreboardConfig, TableLayout};
pub use error::{ErrorKind, Result, ScoreboardError};
pub use scoreboard::{MatchSorter, Scoreboard, SharedScoreboard};
pub use types::{Match, MatchHandle, TeamName};

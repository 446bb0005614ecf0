//! A single ongoing match on the scoreboard.
//!
//! ## Lifecycle
//!
//! A `Match` is created at `0:0` by the scoreboard when a match starts,
//! has its scores overwritten by updates, and is dropped when the match
//! finishes. The teams never change once the match has started.
//!
//! ## Start Sequence
//!
//! Each match carries the value of the scoreboard's start counter at the
//! moment it was created. No two matches on one board share a sequence,
//! which makes it a complete tie-break for ranking.

use serde::Serialize;

use crate::types::{PairKey, TeamName};

/// An active match between two teams.
///
/// ## Example
///
/// ```
/// use live_scoreboard::Scoreboard;
///
/// let mut board = Scoreboard::new();
/// board.start_match("Mexico", "Canada").unwrap();
/// board.update_match_score("Mexico", "Canada", 0, 5).unwrap();
///
/// let m = board.get_match("Canada", "Mexico").unwrap();
/// assert_eq!(m.home().as_str(), "Mexico");
/// assert_eq!(m.total_score(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    home: TeamName,
    away: TeamName,
    home_score: u32,
    away_score: u32,
    start_sequence: u64,
}

impl Match {
    /// Create a new match at `0:0`
    pub(crate) fn new(home: TeamName, away: TeamName, start_sequence: u64) -> Self {
        Self {
            home,
            away,
            home_score: 0,
            away_score: 0,
            start_sequence,
        }
    }

    /// Home team
    #[inline]
    pub fn home(&self) -> &TeamName {
        &self.home
    }

    /// Away team
    #[inline]
    pub fn away(&self) -> &TeamName {
        &self.away
    }

    #[inline]
    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    #[inline]
    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    /// Sequence number assigned at start (higher = started later)
    #[inline]
    pub fn start_sequence(&self) -> u64 {
        self.start_sequence
    }

    /// Sum of both scores
    ///
    /// Widened to `u64` so two maximal `u32` scores cannot overflow.
    #[inline]
    pub fn total_score(&self) -> u64 {
        self.home_score as u64 + self.away_score as u64
    }

    /// Order-insensitive lookup key
    pub fn pair_key(&self) -> PairKey {
        PairKey::of(&self.home, &self.away)
    }

    /// Overwrite both scores. Bounds are checked by the scoreboard.
    pub(crate) fn set_score(&mut self, home_score: u32, away_score: u32) {
        self.home_score = home_score;
        self.away_score = away_score;
    }

    /// Summary row: `"<home> <homeScore>:<awayScore> <away>"`
    pub fn summary_row(&self) -> String {
        format!(
            "{} {}:{} {}",
            self.home, self.home_score, self.away_score, self.away
        )
    }
}

// ============================================================================
// MatchHandle
// ============================================================================

/// Reference to a started match, returned by `start_match`.
///
/// A handle pairs the storage slot with the match's start sequence, so it
/// stops resolving once the match is finished even if the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchHandle {
    pub(crate) key: usize,
    pub(crate) sequence: u64,
}

impl MatchHandle {
    /// Start sequence of the referenced match
    #[inline]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

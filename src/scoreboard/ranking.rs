//! Ranking orders for active matches.
//!
//! ## Orders
//!
//! | Sorter | Primary key | Tie-break |
//! |--------|-------------|-----------|
//! | [`MatchSorter::TotalScore`] | total score, descending | start sequence, descending |
//! | [`MatchSorter::HomeTeamAlphabetical`] | home name (normalized), ascending | start sequence, descending |
//!
//! Start sequences are unique per board, so both orders are total: the same
//! set of matches always ranks identically.

use std::cmp::{Ordering, Reverse};

use crate::types::Match;

/// Ranking order for summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchSorter {
    /// Highest total score first, most recently started first among equals
    #[default]
    TotalScore,
    /// Home team name A-Z, most recently started first among equals
    HomeTeamAlphabetical,
}

impl MatchSorter {
    /// Compare two matches under this order
    pub fn compare(self, a: &Match, b: &Match) -> Ordering {
        match self {
            MatchSorter::TotalScore => {
                (Reverse(a.total_score()), Reverse(a.start_sequence()))
                    .cmp(&(Reverse(b.total_score()), Reverse(b.start_sequence())))
            }
            MatchSorter::HomeTeamAlphabetical => (a.home().key(), Reverse(a.start_sequence()))
                .cmp(&(b.home().key(), Reverse(b.start_sequence()))),
        }
    }

    /// Sort a slice of match references in place
    pub fn sort(self, matches: &mut [&Match]) {
        // Keys are total, so an unstable sort is deterministic
        matches.sort_unstable_by(|a, b| self.compare(a, b));
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

//! Thread-safe handle around a [`Scoreboard`].
//!
//! `start_match` reads the membership map and then writes the match
//! storage, both indexes and the sequence counter. All of that must happen
//! under one lock, so the whole board sits behind a single `Mutex` and every
//! call holds it for its full duration.
//!
//! ## Example
//!
//! ```
//! use std::thread;
//! use live_scoreboard::SharedScoreboard;
//!
//! let board = SharedScoreboard::default();
//! let workers: Vec<_> = (0..4)
//!     .map(|i| {
//!         let board = board.clone();
//!         thread::spawn(move || board.start_match(&format!("H{i}"), &format!("A{i}")))
//!     })
//!     .collect();
//! for w in workers {
//!     w.join().unwrap().unwrap();
//! }
//! assert_eq!(board.len(), 4);
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::ScoreboardConfig;
use crate::error::Result;
use crate::scoreboard::Scoreboard;
use crate::types::{Match, MatchHandle};

/// Cloneable, lock-guarded scoreboard. Clones share one board.
#[derive(Debug, Clone, Default)]
pub struct SharedScoreboard {
    inner: Arc<Mutex<Scoreboard>>,
}

impl SharedScoreboard {
    /// Wrap an existing board
    pub fn new(board: Scoreboard) -> Self {
        Self {
            inner: Arc::new(Mutex::new(board)),
        }
    }

    /// Build a board from `config` and wrap it
    pub fn with_config(config: ScoreboardConfig) -> Result<Self> {
        Ok(Self::new(Scoreboard::with_config(config)?))
    }

    /// Lock the board for a compound operation
    ///
    /// A panic in another holder cannot leave the board half-written (every
    /// mutation validates before it writes), so a poisoned lock is recovered.
    pub fn lock(&self) -> MutexGuard<'_, Scoreboard> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn start_match(&self, home: &str, away: &str) -> Result<MatchHandle> {
        self.lock().start_match(home, away)
    }

    pub fn update_match_score(
        &self,
        home: &str,
        away: &str,
        home_score: i64,
        away_score: i64,
    ) -> Result<()> {
        self.lock()
            .update_match_score(home, away, home_score, away_score)
    }

    pub fn finish_match(&self, home: &str, away: &str) -> Result<Match> {
        self.lock().finish_match(home, away)
    }

    pub fn summary(&self) -> String {
        self.lock().summary()
    }

    pub fn summary_page(&self, max_lines: usize, start_from: usize) -> String {
        self.lock().summary_page(max_lines, start_from)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the current board
    pub fn snapshot(&self) -> Scoreboard {
        self.lock().clone()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let board = SharedScoreboard::default();
        let other = board.clone();

        board.start_match("Team A", "Team B").unwrap();
        other.update_match_score("Team B", "Team A", 1, 2).unwrap();

        assert_eq!(board.summary(), "Team A 2:1 Team B");
        other.finish_match("Team A", "Team B").unwrap();
        assert!(board.is_empty());
    }

    #[test]
    fn test_concurrent_starts_admit_each_team_once() {
        let board = SharedScoreboard::default();

        // Every thread tries to put "Shared FC" into a match
        let workers: Vec<_> = (0..16)
            .map(|i| {
                let board = board.clone();
                thread::spawn(move || board.start_match("Shared FC", &format!("Rival {i}")))
            })
            .collect();

        let results: Vec<_> = workers.into_iter().map(|w| w.join().unwrap()).collect();
        let started = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(started, 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| e.kind() == ErrorKind::DuplicateTeam));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_concurrent_start_sequences_are_unique() {
        let board = SharedScoreboard::default();
        let workers: Vec<_> = (0..8)
            .map(|i| {
                let board = board.clone();
                thread::spawn(move || {
                    (0..25)
                        .map(|j| board.start_match(&format!("H{i}-{j}"), &format!("A{i}-{j}")))
                        .collect::<Result<Vec<_>>>()
                })
            })
            .collect();

        let mut sequences: Vec<u64> = workers
            .into_iter()
            .flat_map(|w| w.join().unwrap().unwrap())
            .map(|h| h.sequence())
            .collect();
        sequences.sort_unstable();
        assert_eq!(sequences, (0..200).collect::<Vec<u64>>());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let board = SharedScoreboard::default();
        board.start_match("Team A", "Team B").unwrap();

        let snapshot = board.snapshot();
        board.finish_match("Team A", "Team B").unwrap();

        assert_eq!(snapshot.len(), 1);
        assert!(board.is_empty());
    }
}

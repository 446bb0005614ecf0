//! The scoreboard: active matches, team membership, ranking.
//!
//! ## Architecture
//!
//! - **Slab**: storage for active matches, O(1) insert/remove
//! - **Pair index**: `PairKey` to slab key, for order-insensitive lookup
//! - **Membership**: set of normalized team names currently playing, for
//!   the one-match-per-team check without scanning
//!
//! The pair index and membership set are derived from the slab. They are
//! only written by `insert_match` / `remove_match`, which update all three
//! structures together.
//!
//! ## Example
//!
//! ```
//! use live_scoreboard::Scoreboard;
//!
//! let mut board = Scoreboard::new();
//! board.start_match("Spain", "Brazil").unwrap();
//! board.start_match("Uruguay", "Italy").unwrap();
//! board.update_match_score("Brazil", "Spain", 10, 2).unwrap();
//!
//! assert_eq!(board.summary(), "Spain 10:2 Brazil\nUruguay 0:0 Italy");
//! ```

use std::collections::{HashMap, HashSet};

use sha2::{Digest, Sha256};
use slab::Slab;
use tracing::debug;

use crate::config::ScoreboardConfig;
use crate::error::{Result, ScoreboardError};
use crate::scoreboard::summary;
use crate::scoreboard::MatchSorter;
use crate::types::{normalize, Match, MatchHandle, PairKey, TeamName};

/// In-memory scoreboard of ongoing matches.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    /// Active match storage
    matches: Slab<Match>,

    /// Pair key to slab key
    pair_index: HashMap<PairKey, usize>,

    /// Normalized names of every team in an active match
    membership: HashSet<String>,

    /// Next start sequence
    next_sequence: u64,

    config: ScoreboardConfig,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard {
    /// Create an empty scoreboard with the default configuration
    pub fn new() -> Self {
        Self::from_valid_config(ScoreboardConfig::default())
    }

    /// Create an empty scoreboard with a custom configuration
    ///
    /// Fails with [`ScoreboardError::InvalidConfig`] if the config does not
    /// validate.
    pub fn with_config(config: ScoreboardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ScoreboardConfig) -> Self {
        Self {
            matches: Slab::new(),
            pair_index: HashMap::new(),
            membership: HashSet::new(),
            next_sequence: 0,
            config,
        }
    }

    // ========================================================================
    // Size and Access
    // ========================================================================

    /// Active configuration
    #[inline]
    pub fn config(&self) -> &ScoreboardConfig {
        &self.config
    }

    /// Number of active matches
    #[inline]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// True if `team` plays in any active match
    pub fn is_playing(&self, team: &str) -> bool {
        self.membership.contains(&normalize(team))
    }

    /// Look up the active match between two teams, in either order
    pub fn get_match(&self, home: &str, away: &str) -> Result<&Match> {
        let key = self.resolve(home, away)?;
        Ok(&self.matches[key])
    }

    /// Look up a match by the handle returned from `start_match`
    pub fn match_by_handle(&self, handle: MatchHandle) -> Result<&Match> {
        self.matches
            .get(handle.key)
            .filter(|m| m.start_sequence() == handle.sequence)
            .ok_or_else(|| stale_handle(handle))
    }

    /// Iterate active matches in storage order (unranked)
    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().map(|(_, m)| m)
    }

    // ========================================================================
    // Match Lifecycle
    // ========================================================================

    /// Start a new match at `0:0`
    ///
    /// # Errors
    ///
    /// * `EmptyTeamName` / `SameTeam` - malformed pair
    /// * `DuplicateTeam` - either team is already playing
    ///
    /// # Example
    ///
    /// ```
    /// use live_scoreboard::{ErrorKind, Scoreboard};
    ///
    /// let mut board = Scoreboard::new();
    /// board.start_match("Team A", "Team B").unwrap();
    ///
    /// let err = board.start_match("Team A", "Team C").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DuplicateTeam);
    /// ```
    pub fn start_match(&mut self, home: &str, away: &str) -> Result<MatchHandle> {
        let (home, away) = match validate_pair(home, away) {
            Ok(pair) => pair,
            Err(err) => {
                debug!(%err, "start_match rejected");
                return Err(err);
            }
        };

        for team in [&home, &away] {
            if self.membership.contains(team.key()) {
                debug!(team = %team, "start_match rejected: team already playing");
                return Err(ScoreboardError::DuplicateTeam {
                    team: team.to_string(),
                });
            }
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let handle = self.insert_match(Match::new(home, away, sequence));
        debug!(
            home = %self.matches[handle.key].home(),
            away = %self.matches[handle.key].away(),
            sequence,
            "match started"
        );
        Ok(handle)
    }

    /// Overwrite the score of an active match
    ///
    /// Teams may be named in either order; each score goes to the team
    /// named in the same position. Decreases are allowed.
    ///
    /// # Errors
    ///
    /// * `ScoreOutOfRange` - a score is negative or above `max_score`
    /// * `MatchNotFound` - no active match between the two teams
    pub fn update_match_score(
        &mut self,
        home: &str,
        away: &str,
        home_score: i64,
        away_score: i64,
    ) -> Result<()> {
        let (home_score, away_score) = self.validate_scores(home_score, away_score)?;
        let key = self.resolve(home, away)?;

        let m = &mut self.matches[key];
        // Pair may have been named away-first
        let (stored_home, stored_away) = if m.home().key() == normalize(home) {
            (home_score, away_score)
        } else {
            (away_score, home_score)
        };
        m.set_score(stored_home, stored_away);

        debug!(
            home = %m.home(),
            away = %m.away(),
            home_score = stored_home,
            away_score = stored_away,
            "score updated"
        );
        Ok(())
    }

    /// Overwrite the score of the match behind `handle`
    pub fn update_score_by_handle(
        &mut self,
        handle: MatchHandle,
        home_score: i64,
        away_score: i64,
    ) -> Result<()> {
        let (home_score, away_score) = self.validate_scores(home_score, away_score)?;
        self.match_by_handle(handle)?;

        let m = &mut self.matches[handle.key];
        m.set_score(home_score, away_score);
        debug!(home = %m.home(), away = %m.away(), home_score, away_score, "score updated");
        Ok(())
    }

    /// Finish a match, releasing both teams
    ///
    /// Returns the finished match with its final score.
    pub fn finish_match(&mut self, home: &str, away: &str) -> Result<Match> {
        let key = self.resolve(home, away)?;
        let finished = self.remove_match(key);
        debug!(
            home = %finished.home(),
            away = %finished.away(),
            home_score = finished.home_score(),
            away_score = finished.away_score(),
            "match finished"
        );
        Ok(finished)
    }

    /// Finish the match behind `handle`
    pub fn finish_by_handle(&mut self, handle: MatchHandle) -> Result<Match> {
        self.match_by_handle(handle)?;
        let finished = self.remove_match(handle.key);
        debug!(home = %finished.home(), away = %finished.away(), "match finished");
        Ok(finished)
    }

    /// Finish every active match
    ///
    /// The start sequence keeps counting, so later matches still rank as
    /// newer than anything started before the clear.
    pub fn clear(&mut self) {
        let finished = self.matches.len();
        self.matches.clear();
        self.pair_index.clear();
        self.membership.clear();
        debug!(finished, "scoreboard cleared");
    }

    // ========================================================================
    // Ranking and Summary
    // ========================================================================

    /// Active matches in summary order
    pub fn ranked(&self) -> Vec<&Match> {
        self.ranked_by(MatchSorter::TotalScore)
    }

    /// Active matches ranked by `sorter`
    pub fn ranked_by(&self, sorter: MatchSorter) -> Vec<&Match> {
        let mut ranked: Vec<&Match> = self.iter().collect();
        sorter.sort(&mut ranked);
        ranked
    }

    /// First page of the summary, sized by `max_summary_lines`
    pub fn summary(&self) -> String {
        self.summary_page(self.config.max_summary_lines, 0)
    }

    /// Summary page of at most `max_lines` rows from the `start_from`-th
    /// ranked match
    ///
    /// # Example
    ///
    /// ```
    /// use live_scoreboard::Scoreboard;
    ///
    /// let mut board = Scoreboard::new();
    /// board.start_match("A", "B").unwrap();
    /// board.start_match("C", "D").unwrap();
    ///
    /// assert_eq!(board.summary_page(1, 0), "C 0:0 D");
    /// assert_eq!(board.summary_page(1, 1), "A 0:0 B");
    /// assert_eq!(board.summary_page(1, 2), "");
    /// ```
    pub fn summary_page(&self, max_lines: usize, start_from: usize) -> String {
        summary::join_rows(&self.summary_rows(max_lines, start_from))
    }

    /// Unjoined summary rows for a page
    pub fn summary_rows(&self, max_lines: usize, start_from: usize) -> Vec<String> {
        let ranked = self.ranked();
        summary::rows(summary::page(&ranked, max_lines, start_from))
    }

    /// Column-aligned table of the top `max_summary_lines` matches
    pub fn table_summary(&self) -> String {
        let ranked = self.ranked();
        let shown = summary::page(&ranked, self.config.max_summary_lines, 0);
        summary::table(shown, ranked.len() - shown.len(), &self.config.table)
    }

    // ========================================================================
    // State Root
    // ========================================================================

    /// SHA-256 digest of the ranked board
    ///
    /// Covers every match's sequence, teams and scores in ranked order, so
    /// identical operation sequences yield identical roots.
    pub fn state_root(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update((self.len() as u64).to_le_bytes());
        for m in self.ranked() {
            hasher.update(m.start_sequence().to_le_bytes());
            for team in [m.home(), m.away()] {
                hasher.update((team.as_str().len() as u64).to_le_bytes());
                hasher.update(team.as_str().as_bytes());
            }
            hasher.update(m.home_score().to_le_bytes());
            hasher.update(m.away_score().to_le_bytes());
        }

        let mut root = [0u8; 32];
        root.copy_from_slice(&hasher.finalize());
        root
    }

    /// State root as a hex string
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn validate_scores(&self, home_score: i64, away_score: i64) -> Result<(u32, u32)> {
        let max = self.config.max_score;
        let check = |score: i64| {
            u32::try_from(score)
                .ok()
                .filter(|s| *s <= max)
                .ok_or(ScoreboardError::ScoreOutOfRange { score, max })
        };

        match (check(home_score), check(away_score)) {
            (Ok(h), Ok(a)) => Ok((h, a)),
            (Err(err), _) | (_, Err(err)) => {
                debug!(%err, "score update rejected");
                Err(err)
            }
        }
    }

    fn resolve(&self, home: &str, away: &str) -> Result<usize> {
        self.pair_index
            .get(&PairKey::new(home, away))
            .copied()
            .ok_or_else(|| {
                debug!(home, away, "no active match for pair");
                ScoreboardError::not_found(home, away)
            })
    }

    /// Store a match and register its pair and both teams
    fn insert_match(&mut self, m: Match) -> MatchHandle {
        let pair = m.pair_key();
        let home = m.home().key().to_string();
        let away = m.away().key().to_string();
        let sequence = m.start_sequence();

        let key = self.matches.insert(m);
        self.pair_index.insert(pair, key);
        self.membership.insert(home);
        self.membership.insert(away);

        MatchHandle { key, sequence }
    }

    /// Drop a match and release its pair and both teams
    fn remove_match(&mut self, key: usize) -> Match {
        let m = self.matches.remove(key);
        self.pair_index.remove(&m.pair_key());
        self.membership.remove(m.home().key());
        self.membership.remove(m.away().key());
        m
    }
}

fn validate_pair(home: &str, away: &str) -> Result<(TeamName, TeamName)> {
    let home = TeamName::parse(home)?;
    let away = TeamName::parse(away)?;
    if home == away {
        return Err(ScoreboardError::SameTeam {
            home: home.to_string(),
            away: away.to_string(),
        });
    }
    Ok((home, away))
}

fn stale_handle(handle: MatchHandle) -> ScoreboardError {
    debug!(key = handle.key, sequence = handle.sequence, "stale match handle");
    ScoreboardError::StaleHandle {
        sequence: handle.sequence,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

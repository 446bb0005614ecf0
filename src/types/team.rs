//! Team identifiers and order-insensitive pair keys.
//!
//! ## Identity
//!
//! A team is identified by its name, trimmed and compared case-insensitively.
//! `"Team A"`, `" team a"` and `"TEAM A"` are the same team. The text given
//! at construction is kept for display.
//!
//! ## Pair Keys
//!
//! [`PairKey`] holds the two normalized names in sorted order, so
//! `(A, B)` and `(B, A)` resolve to the same key.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{Result, ScoreboardError};

/// A validated team name.
///
/// ## Example
///
/// ```
/// use live_scoreboard::types::TeamName;
///
/// let team = TeamName::parse(" Spain ").unwrap();
/// assert_eq!(team.as_str(), "Spain");
/// assert_eq!(team.key(), "spain");
/// ```
#[derive(Debug, Clone)]
pub struct TeamName {
    /// Display form (trimmed)
    display: String,

    /// Lowercased identity used for lookup
    key: String,
}

impl TeamName {
    /// Parse and validate a team name
    ///
    /// Fails with [`ScoreboardError::EmptyTeamName`] when the name is empty
    /// after trimming.
    pub fn parse(raw: &str) -> Result<Self> {
        let display = raw.trim();
        if display.is_empty() {
            return Err(ScoreboardError::EmptyTeamName);
        }

        Ok(Self {
            display: display.to_string(),
            key: normalize(display),
        })
    }

    /// Name as given at construction
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Normalized identity
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for TeamName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for TeamName {}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

// Serialized as the display string only
impl Serialize for TeamName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display)
    }
}

/// Normalize a raw team name into its lookup identity
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// ============================================================================
// PairKey
// ============================================================================

/// Order-insensitive key for a match between two teams
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    low: String,
    high: String,
}

impl PairKey {
    /// Build a key from two raw names (normalized internally)
    pub fn new(a: &str, b: &str) -> Self {
        Self::from_normalized(normalize(a), normalize(b))
    }

    /// Build a key from two validated team names
    pub fn of(home: &TeamName, away: &TeamName) -> Self {
        Self::from_normalized(home.key().to_string(), away.key().to_string())
    }

    fn from_normalized(a: String, b: String) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

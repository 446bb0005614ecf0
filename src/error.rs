//! Error types for scoreboard operations.
//!
//! Every fallible operation returns [`Result`]. Errors are reported at the
//! call that triggered them and a failed call never mutates the board.
//!
//! ## Kinds
//!
//! | Kind | Raised by |
//! |------|-----------|
//! | [`ErrorKind::Validation`] | bad team name, same team twice, score out of range |
//! | [`ErrorKind::DuplicateTeam`] | `start_match` with a team already playing |
//! | [`ErrorKind::MatchNotFound`] | update/finish of a pair or handle that is not active |
//! | [`ErrorKind::Config`] | invalid [`ScoreboardConfig`](crate::ScoreboardConfig) |

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ScoreboardError>;

/// Coarse classification of a [`ScoreboardError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed team identifier or score
    Validation,
    /// Team already takes part in an active match
    DuplicateTeam,
    /// No active match for the given pair or handle
    MatchNotFound,
    /// Rejected configuration
    Config,
}

/// Errors returned by the scoreboard
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreboardError {
    /// Team identifier is empty (or whitespace only)
    #[error("team name must not be empty")]
    EmptyTeamName,

    /// Home and away name the same team
    #[error("home and away teams must be different: '{home}' vs '{away}'")]
    SameTeam { home: String, away: String },

    /// Score outside `[0, max]`
    #[error("score {score} is out of range [0, {max}]")]
    ScoreOutOfRange { score: i64, max: u32 },

    /// Team is already playing in an active match
    #[error("team '{team}' is already playing in an active match")]
    DuplicateTeam { team: String },

    /// No active match for the pair
    #[error("no active match between '{home}' and '{away}'")]
    MatchNotFound { home: String, away: String },

    /// Handle refers to a match that has since finished
    #[error("match handle #{sequence} no longer refers to an active match")]
    StaleHandle { sequence: u64 },

    /// Configuration rejected by `ScoreboardConfig::validate`
    #[error("invalid scoreboard config: {0}")]
    InvalidConfig(String),
}

impl ScoreboardError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScoreboardError::EmptyTeamName
            | ScoreboardError::SameTeam { .. }
            | ScoreboardError::ScoreOutOfRange { .. } => ErrorKind::Validation,
            ScoreboardError::DuplicateTeam { .. } => ErrorKind::DuplicateTeam,
            ScoreboardError::MatchNotFound { .. } | ScoreboardError::StaleHandle { .. } => {
                ErrorKind::MatchNotFound
            }
            ScoreboardError::InvalidConfig(_) => ErrorKind::Config,
        }
    }

    pub(crate) fn not_found(home: &str, away: &str) -> Self {
        ScoreboardError::MatchNotFound {
            home: home.to_string(),
            away: away.to_string(),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

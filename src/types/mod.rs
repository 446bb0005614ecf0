//! Core data types for the live scoreboard
//!
//! ## Types
//!
//! - [`TeamName`]: A validated, case-insensitive team identifier
//! - [`PairKey`]: Order-insensitive key for a pair of teams
//! - [`Match`]: An active match with scores and start sequence
//! - [`MatchHandle`]: Reference returned when a match starts

mod live_match;
mod team;

// Re-export all types at module level
pub use live_match::{Match, MatchHandle};
pub use team::{normalize, PairKey, TeamName};

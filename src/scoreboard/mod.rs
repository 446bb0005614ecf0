//! Scoreboard module.
//!
//! ## Components
//!
//! - [`Scoreboard`]: active matches, membership check, lifecycle operations
//! - [`MatchSorter`]: ranking orders used by summaries
//! - [`summary`]: row and table rendering
//! - [`SharedScoreboard`]: single-lock wrapper for concurrent hosts
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Start match | O(1)* |
//! | Update score | O(1)* |
//! | Finish match | O(1)* |
//! | Summary | O(n log n) |
//!
//! *Amortized, via hash indexes over the slab

pub mod board;
pub mod ranking;
pub mod shared;
pub mod summary;

pub use board::Scoreboard;
pub use ranking::MatchSorter;
pub use shared::SharedScoreboard;

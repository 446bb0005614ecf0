//! Live Scoreboard - Demo Binary
//!
//! Plays through a short tournament round and prints the ranked summary
//! and the padded table. Set `RUST_LOG=debug` to see every board mutation.

use live_scoreboard::{Scoreboard, ScoreboardError};
use tracing::info;

fn main() -> Result<(), ScoreboardError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut board = Scoreboard::new();

    let results = [
        ("Mexico", "Canada", 0, 5),
        ("Spain", "Brazil", 10, 2),
        ("Germany", "France", 2, 2),
        ("Uruguay", "Italy", 6, 6),
        ("Argentina", "Australia", 3, 1),
    ];

    for (home, away, _, _) in results {
        board.start_match(home, away)?;
    }
    for (home, away, home_score, away_score) in results {
        board.update_match_score(home, away, home_score, away_score)?;
    }
    info!(matches = board.len(), state_root = %board.state_root_hex(), "round in progress");

    println!("Summary:");
    println!("{}", board.summary());
    println!();
    println!("{}", board.table_summary());
    println!();

    let finished = board.finish_match("Uruguay", "Italy")?;
    info!(
        home = %finished.home(),
        away = %finished.away(),
        score = %format!("{}:{}", finished.home_score(), finished.away_score()),
        "final whistle"
    );

    println!("After Uruguay - Italy:");
    println!("{}", board.summary());
    Ok(())
}

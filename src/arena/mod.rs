//! Headless agent-vs-agent play on top of the engine, with result tracking.

mod game;
mod stats;

pub use game::{play_game, replay, GameRecord};
pub use stats::MatchStats;

/// Batch playout settings, loadable from the `[playout]` section.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayoutConfig {
    /// Number of games in a batch run.
    pub games: usize,
    /// Seed for the random agents; fresh entropy when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Print a progress line every this many games.
    pub log_interval: usize,
    /// Rolling window used for the reported rates.
    pub stats_window: usize,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        PlayoutConfig {
            games: 1_000,
            seed: None,
            log_interval: 100,
            stats_window: 1_000,
        }
    }
}

use std::collections::VecDeque;

use super::GameRecord;
use crate::game::{GameStatus, Player};

struct GameResult {
    status: GameStatus,
    game_length: usize,
}

/// Results of finished games, with rolling-window rates over the most recent
/// ones and lifetime tallies that are never capped.
pub struct MatchStats {
    results: VecDeque<GameResult>,
    capacity: usize,
    total_games: usize,
    p1_wins: usize,
    p2_wins: usize,
    ties: usize,
}

impl MatchStats {
    pub fn with_capacity(capacity: usize) -> Self {
        MatchStats {
            results: VecDeque::with_capacity(capacity),
            capacity,
            total_games: 0,
            p1_wins: 0,
            p2_wins: 0,
            ties: 0,
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Record a finished game. Games that did not reach a terminal status are
    /// ignored.
    pub fn record(&mut self, record: &GameRecord) {
        match record.status {
            GameStatus::NotOver => return,
            GameStatus::P1Wins => self.p1_wins += 1,
            GameStatus::P2Wins => self.p2_wins += 1,
            GameStatus::Tie => self.ties += 1,
        }

        self.total_games += 1;
        self.results.push_back(GameResult {
            status: record.status,
            game_length: record.game_length(),
        });
        if self.results.len() > self.capacity {
            self.results.pop_front();
        }
    }

    /// Share of the last N games won by `player`.
    pub fn win_rate(&self, player: Player, last_n: usize) -> f32 {
        self.rate(last_n, |status| status.winner() == Some(player))
    }

    /// Share of the last N games that ended in a tie.
    pub fn tie_rate(&self, last_n: usize) -> f32 {
        self.rate(last_n, |status| status == GameStatus::Tie)
    }

    /// Average game length over the last N games.
    pub fn average_game_length(&self, last_n: usize) -> f32 {
        let n = self.results.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let total: usize = self
            .results
            .iter()
            .rev()
            .take(n)
            .map(|r| r.game_length)
            .sum();
        total as f32 / n as f32
    }

    fn rate(&self, last_n: usize, matches: impl Fn(GameStatus) -> bool) -> f32 {
        let n = self.results.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let hits = self
            .results
            .iter()
            .rev()
            .take(n)
            .filter(|r| matches(r.status))
            .count();
        hits as f32 / n as f32
    }

    pub fn total_games(&self) -> usize {
        self.total_games
    }

    /// Lifetime wins for `player`.
    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::P1 => self.p1_wins,
            Player::P2 => self.p2_wins,
        }
    }

    pub fn ties(&self) -> usize {
        self.ties
    }
}

impl Default for MatchStats {
    fn default() -> Self {
        Self::new()
    }
}

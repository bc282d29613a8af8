use std::fmt;

use super::board::Cell;
use super::state::GameStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::P1 => Cell::P1,
            Player::P2 => Cell::P2,
        }
    }

    /// The terminal status reached when this player connects
    pub fn wins(self) -> GameStatus {
        match self {
            Player::P1 => GameStatus::P1Wins,
            Player::P2 => GameStatus::P2Wins,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::P1 => "P1",
            Player::P2 => "P2",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

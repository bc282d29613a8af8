use std::path::PathBuf;

use crate::game::Player;

/// Why a move inside the board was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMoveReason {
    #[error("column is full")]
    ColumnFull,

    #[error("game is already over")]
    GameOver,
}

/// Errors raised by board queries and moves. A failed move leaves the game
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("position ({row}, {column}) is outside the {rows}x{cols} board")]
    CellOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        cols: usize,
    },

    #[error("column {column} is outside the board (columns 0..{cols})")]
    ColumnOutOfRange { column: usize, cols: usize },

    #[error("invalid move in column {column}: {reason}")]
    InvalidMove {
        column: usize,
        reason: InvalidMoveReason,
    },
}

/// Errors that can occur while agents play a game.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("agent '{agent}' had no move for {player} in a running game")]
    NoMove { agent: String, player: Player },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

//! Core Connect Four game logic: board, players, the game state machine, and
//! the observable engine that drives a single game.

mod board;
mod engine;
mod observer;
mod player;
mod state;

pub use board::{Board, BoardConfig, Cell, COLS, CONNECT, MAX_DIMENSION, ROWS};
pub use engine::ConnectFour;
pub use observer::{Observer, ObserverId, Observers};
pub use player::Player;
pub use state::{GameState, GameStatus};

//! # Connect Four
//!
//! A Connect Four board engine. Two players alternate dropping discs into the
//! columns of a grid; the first to line up four in a row, column or diagonal
//! wins, and a full board with no line is a tie. Every accepted move is pushed
//! synchronously to the observers registered on the engine.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, state machine, observable engine
//! - [`ai`]: Agent trait and a uniformly random agent
//! - [`arena`]: Headless agent-vs-agent playouts and result statistics
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;

use super::{BoardConfig, Cell, GameState, GameStatus, Observer, ObserverId, Observers, Player};
use crate::error::{BoardError, ConfigError};

/// A running game plus the observers that follow it.
///
/// `make_move` is the only way the board changes. Each accepted move is
/// validated, placed, scored, and broadcast to every observer before the call
/// returns. Observers are not required to be `Send`, so neither is the
/// engine: wrap it yourself if several threads need to drive one game.
#[derive(Debug)]
pub struct ConnectFour {
    config: BoardConfig,
    state: GameState,
    observers: Observers,
}

impl ConnectFour {
    /// New game on the standard 6x7 board
    pub fn new() -> Self {
        ConnectFour {
            config: BoardConfig::default(),
            state: GameState::initial(),
            observers: Observers::new(),
        }
    }

    pub fn with_config(config: BoardConfig) -> Result<Self, ConfigError> {
        let state = GameState::with_config(&config)?;
        Ok(ConnectFour {
            config,
            state,
            observers: Observers::new(),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn rows(&self) -> usize {
        self.state.board().rows()
    }

    pub fn cols(&self) -> usize {
        self.state.board().cols()
    }

    pub fn is_valid_move(&self, column: usize) -> bool {
        self.state.is_valid_move(column)
    }

    pub fn legal_moves(&self) -> Vec<usize> {
        self.state.legal_moves()
    }

    /// Drop the current player's disc into `column` and notify observers.
    /// Rejected moves change nothing and notify no one.
    pub fn make_move(&mut self, column: usize) -> Result<GameStatus, BoardError> {
        let status = self.state.apply_move_mut(column)?;
        self.observers.notify_all(&self.state);
        Ok(status)
    }

    pub fn contents(&self, row: usize, column: usize) -> Result<Cell, BoardError> {
        self.state.contents(row, column)
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    pub fn moves_made(&self) -> usize {
        self.state.moves_made()
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn add_observer<O: Observer + 'static>(&mut self, observer: O) -> ObserverId {
        self.observers.add(observer)
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Start a new game with the same geometry and observers. Observers are
    /// notified once with the empty board.
    pub fn reset(&mut self) {
        self.state = self.state.restarted();
        self.observers.notify_all(&self.state);
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

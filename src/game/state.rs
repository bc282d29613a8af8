use std::fmt;

use super::{Board, BoardConfig, Cell, Player};
use crate::error::{BoardError, ConfigError, InvalidMoveReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    NotOver,
    P1Wins,
    P2Wins,
    Tie,
}

impl GameStatus {
    /// No further moves are accepted once the status leaves `NotOver`
    pub fn is_terminal(self) -> bool {
        self != GameStatus::NotOver
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::P1Wins => Some(Player::P1),
            GameStatus::P2Wins => Some(Player::P2),
            GameStatus::NotOver | GameStatus::Tie => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::NotOver => "not over",
            GameStatus::P1Wins => "P1 wins",
            GameStatus::P2Wins => "P2 wins",
            GameStatus::Tie => "tie",
        };
        f.write_str(text)
    }
}

/// Snapshot of a game: the grid, whose turn it is, how many discs have been
/// played and whether the game has ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    moves_made: usize,
    status: GameStatus,
}

impl GameState {
    /// Create initial game state on the standard 6x7 board
    pub fn initial() -> Self {
        Self::with_board(Board::new())
    }

    /// Create initial game state with the configured board geometry
    pub fn with_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_board(Board::from_config(config)?))
    }

    /// Fresh game on a board of the same geometry
    pub fn restarted(&self) -> Self {
        Self::with_board(self.board.cleared())
    }

    fn with_board(board: Board) -> Self {
        GameState {
            board,
            current_player: Player::P1, // P1 starts
            moves_made: 0,
            status: GameStatus::NotOver,
        }
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn contents(&self, row: usize, column: usize) -> Result<Cell, BoardError> {
        self.board.contents(row, column)
    }

    /// True iff the game is still running and `column` has room for a disc
    pub fn is_valid_move(&self, column: usize) -> bool {
        !self.is_terminal() && !self.board.is_column_full(column)
    }

    /// Columns that accept a disc, empty once the game is over
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.board.cols())
            .filter(|&col| self.is_valid_move(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, BoardError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply a move in place. A rejected move leaves the state untouched.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<GameStatus, BoardError> {
        if self.is_terminal() {
            return Err(BoardError::InvalidMove {
                column,
                reason: InvalidMoveReason::GameOver,
            });
        }

        let row = self
            .board
            .drop_piece(column, self.current_player.to_cell())?;
        self.moves_made += 1;

        // A win on the last empty cell is still a win
        if self.board.check_win(row, column) {
            self.status = self.current_player.wins();
        } else if self.moves_made == self.board.rows() * self.board.cols() {
            self.status = GameStatus::Tie;
        } else {
            self.current_player = self.current_player.other();
        }

        Ok(self.status)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{COLS, ROWS};

    /// Plays the columns in order, one disc per move.
    fn play(columns: &[usize]) -> GameState {
        let mut state = GameState::initial();
        for &col in columns {
            state.apply_move_mut(col).unwrap();
        }
        state
    }

    /// Fills the 6x7 board without anyone connecting four.
    const TIE_SEQUENCE: [usize; 42] = [
        0, 0, 0, 1, 1, 1, 2, 2, 2, 4, 4, 4, 3, 3, 3, 5, 5, 5, 6, 6, 6, //
        0, 0, 0, 1, 1, 1, 2, 2, 2, 4, 4, 4, 3, 3, 3, 5, 5, 5, 6, 6, 6,
    ];

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::P1);
        assert_eq!(state.moves_made(), 0);
        assert_eq!(state.status(), GameStatus::NotOver);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_moves().len(), COLS);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::P2);
        assert_eq!(new_state.moves_made(), 1);
        assert_eq!(new_state.contents(5, 3), Ok(Cell::P1));

        // The original is untouched
        assert_eq!(state, GameState::initial());
    }

    #[test]
    fn test_horizontal_win_detection() {
        // P1 builds the bottom row, P2 stacks on top of it
        let state = play(&[0, 0, 1, 1, 2, 2, 3]);

        assert!(state.is_terminal());
        assert_eq!(state.status(), GameStatus::P1Wins);
        assert_eq!(state.moves_made(), 7);
        // The winner keeps the turn
        assert_eq!(state.current_player(), Player::P1);
    }

    #[test]
    fn test_vertical_win_detection() {
        let state = play(&[3, 0, 3, 0, 3, 0, 3]);
        assert_eq!(state.status(), GameStatus::P1Wins);
        assert_eq!(state.moves_made(), 7);
    }

    #[test]
    fn test_second_player_win() {
        let state = play(&[6, 0, 6, 0, 5, 0, 6, 0]);
        assert_eq!(state.status(), GameStatus::P2Wins);
        assert_eq!(state.status().winner(), Some(Player::P2));
        assert_eq!(state.current_player(), Player::P2);
    }

    #[test]
    fn test_diagonal_win_only_on_completing_move() {
        let columns = [0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3];
        let mut state = GameState::initial();
        for (i, &col) in columns.iter().enumerate() {
            let status = state.apply_move_mut(col).unwrap();
            if i + 1 < columns.len() {
                assert_eq!(status, GameStatus::NotOver, "early finish at move {}", i + 1);
            } else {
                assert_eq!(status, GameStatus::P1Wins);
            }
        }
        assert_eq!(state.moves_made(), 11);
    }

    #[test]
    fn test_tie() {
        let state = play(&TIE_SEQUENCE);

        assert_eq!(state.status(), GameStatus::Tie);
        assert_eq!(state.status().winner(), None);
        assert_eq!(state.moves_made(), ROWS * COLS);
        assert!(state.board().is_full());
        assert!(state.legal_moves().is_empty());
    }

    #[test]
    fn test_win_on_last_cell_beats_tie() {
        let columns = [
            1, 2, 4, 6, 5, 2, 1, 0, 2, 5, 4, 0, 6, 5, 4, 1, 5, 2, 1, 6, 3, 4, 0, 4, 5, 2, 5, 4,
            6, 2, 6, 3, 6, 0, 1, 1, 0, 0, 3, 3, 3, 3,
        ];
        let state = play(&columns);

        assert_eq!(state.moves_made(), ROWS * COLS);
        assert!(state.board().is_full());
        assert_eq!(state.status(), GameStatus::P2Wins);
    }

    #[test]
    fn test_move_after_game_over_rejected() {
        let mut state = play(&[3, 0, 3, 0, 3, 0, 3]);
        let before = state.clone();

        assert!(!state.is_valid_move(1));
        assert!(state.legal_moves().is_empty());
        assert_eq!(
            state.apply_move_mut(1),
            Err(BoardError::InvalidMove {
                column: 1,
                reason: InvalidMoveReason::GameOver,
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_full_column_rejected_without_change() {
        let mut state = play(&[2, 2, 2, 2, 2, 2]);
        let before = state.clone();

        assert!(!state.is_valid_move(2));
        assert_eq!(
            state.apply_move_mut(2),
            Err(BoardError::InvalidMove {
                column: 2,
                reason: InvalidMoveReason::ColumnFull,
            })
        );
        assert_eq!(state, before);
        assert!(!state.legal_moves().contains(&2));
    }

    #[test]
    fn test_out_of_range_column() {
        let mut state = GameState::initial();
        assert!(!state.is_valid_move(COLS));
        assert_eq!(
            state.apply_move_mut(COLS),
            Err(BoardError::ColumnOutOfRange {
                column: COLS,
                cols: COLS,
            })
        );
        assert_eq!(state, GameState::initial());
    }

    #[test]
    fn test_with_config() {
        let config = BoardConfig {
            rows: 3,
            cols: 3,
            connect: 3,
        };
        let mut state = GameState::with_config(&config).unwrap();
        assert_eq!(state.legal_moves(), vec![0, 1, 2]);

        for col in [0, 1, 0, 1, 0] {
            state.apply_move_mut(col).unwrap();
        }
        assert_eq!(state.status(), GameStatus::P1Wins);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::NotOver.to_string(), "not over");
        assert_eq!(GameStatus::P1Wins.to_string(), "P1 wins");
        assert_eq!(GameStatus::Tie.to_string(), "tie");
    }
}

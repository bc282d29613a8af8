use std::fmt;

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::error::{BoardError, ConfigError, InvalidMoveReason};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CONNECT: usize = 4;
/// Largest accepted row or column count.
pub const MAX_DIMENSION: usize = 64;

/// Axes scanned for a winning run, as (row step, column step): horizontal,
/// vertical, rising diagonal, falling diagonal. Row 0 is the top, so rising
/// means the row index shrinks as the column grows.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (-1, 1), (1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    P1,
    P2,
}

impl Cell {
    /// Owner of the disc in this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::P1 => Some(Player::P1),
            Cell::P2 => Some(Player::P2),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::P1 => 'X',
            Cell::P2 => 'O',
        }
    }
}

/// Board geometry, loadable from the `[board]` section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    /// Run length needed to win.
    pub connect: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: ROWS,
            cols: COLS,
            connect: CONNECT,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if self.cols == 0 {
            return Err(ConfigError::Validation("board.cols must be > 0".into()));
        }
        if self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.rows and board.cols must be <= {MAX_DIMENSION}"
            )));
        }
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(ConfigError::Validation(
                "board.rows * board.cols overflows".into(),
            ));
        }
        if self.connect < 2 {
            return Err(ConfigError::Validation(
                "board.connect must be >= 2".into(),
            ));
        }
        if self.connect > self.rows.max(self.cols) {
            return Err(ConfigError::Validation(
                "board.connect must not exceed both board.rows and board.cols".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    connect: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty 6x7 board
    pub fn new() -> Self {
        Self::with_dimensions(ROWS, COLS, CONNECT)
    }

    /// Create a new empty board with the configured geometry
    pub fn from_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_dimensions(config.rows, config.cols, config.connect))
    }

    fn with_dimensions(rows: usize, cols: usize, connect: usize) -> Self {
        Board {
            rows,
            cols,
            connect,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Empty board with the same geometry
    pub fn cleared(&self) -> Self {
        Self::with_dimensions(self.rows, self.cols, self.connect)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn connect(&self) -> usize {
        self.connect
    }

    /// Get the cell at a specific position, or `None` outside the grid.
    /// Row 0 is the top row.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.at(row, col))
        } else {
            None
        }
    }

    /// Like [`Board::get`], but reports out-of-range positions as an error
    pub fn contents(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.get(row, col).ok_or(BoardError::CellOutOfRange {
            row,
            column: col,
            rows: self.rows,
            cols: self.cols,
        })
    }

    fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.at(0, col) != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, BoardError> {
        if col >= self.cols {
            return Err(BoardError::ColumnOutOfRange {
                column: col,
                cols: self.cols,
            });
        }

        // Lowest empty row in this column
        let row = (0..self.rows)
            .rev()
            .find(|&row| self.at(row, col) == Cell::Empty)
            .ok_or(BoardError::InvalidMove {
                column: col,
                reason: InvalidMoveReason::ColumnFull,
            })?;

        self.cells[row * self.cols + col] = cell;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Number of discs on the board
    pub fn disc_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.player().is_some())
            .count()
    }

    /// Check if the disc at (row, col) is part of a winning run
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let Some(cell) = self.get(row, col) else {
            return false;
        };
        if cell == Cell::Empty {
            return false;
        }

        AXES.iter()
            .any(|&(dr, dc)| self.run_length(row, col, dr, dc, cell) >= self.connect)
    }

    /// Length of the run through (row, col) along one axis, both directions
    /// plus the disc itself.
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        1 + self.count_direction(row, col, dr, dc, cell)
            + self.count_direction(row, col, -dr, -dc, cell)
    }

    fn count_direction(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while self.in_bounds(r, c) && self.at(r as usize, c as usize) == cell {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: Vec<String> = (0..self.cols)
                .map(|col| self.at(row, col).symbol().to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let footer: Vec<String> = (0..self.cols).map(|col| (col % 10).to_string()).collect();
        write!(f, "{}", footer.join(" "))
    }
}

//! TicTacToe implementation for the game-tree engine
//!
//! The maximizing side plays `X` and the minimizing side plays `O`. A
//! completed line of `X` is worth `+1`, a line of `O` is worth `-1`, and a full
//! board with no line is a draw.
//!
//! # Board Layout
//!
//! Moves address cells by `(row, col)` and are enumerated row-major:
//! ```text
//! (0,0) (0,1) (0,2)
//! (1,0) (1,1) (1,2)
//! (2,0) (2,1) (2,2)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use engine_core::{Side, State};
//! use games_tictactoe::{Mark, TicTacToeMove, TicTacToeState};
//!
//! let mut state = TicTacToeState::new(Side::Minimizing);
//! assert_eq!(state.find_all_moves().len(), 9);
//!
//! assert!(state.do_move(&TicTacToeMove::new(1, 1)));
//! assert_eq!(state.cell(1, 1), Some(Mark::O));
//! ```

use std::fmt;

use engine_core::game_utils::{grid_full, line_winner, GRID_SIZE};
use engine_core::{GameMetadata, Outcome, Side, State, StateError};
use serde::{Deserialize, Serialize};

/// Board dimension
pub const BOARD_SIZE: usize = GRID_SIZE;

/// Grid of optional marks, indexed `[row][col]`
pub type Board = [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE];

/// Game metadata for TicTacToe
pub fn metadata() -> GameMetadata {
    GameMetadata::new("tictactoe", "Tic-Tac-Toe")
        .with_side_labels("computer", "player")
        .with_draws(true)
        .with_description("Get three in a row to win!")
}

/// A mark on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Mark placed by the given side: `X` for maximizing, `O` for minimizing
    #[inline]
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Maximizing => Mark::X,
            Side::Minimizing => Mark::O,
        }
    }

    #[inline]
    pub fn side(self) -> Side {
        match self {
            Mark::X => Side::Maximizing,
            Mark::O => Side::Minimizing,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

/// TicTacToe position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToeState {
    board: Board,
    to_move: Side,
}

impl TicTacToeState {
    /// Create an empty board with `first` to move
    pub fn new(first: Side) -> Self {
        Self {
            board: [[None; BOARD_SIZE]; BOARD_SIZE],
            to_move: first,
        }
    }

    /// Create a position from an existing board
    pub fn from_board(board: Board, to_move: Side) -> Self {
        Self { board, to_move }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark at `(row, col)`, or `None` when empty or out of range
    pub fn cell(&self, row: usize, col: usize) -> Option<Mark> {
        self.board.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Owner of a completed line, if any
    pub fn winner(&self) -> Option<Mark> {
        line_winner(&self.board)
    }

    /// Number of marks placed so far
    pub fn moves_played(&self) -> usize {
        self.board.iter().flatten().filter(|cell| cell.is_some()).count()
    }
}

impl State for TicTacToeState {
    type Move = TicTacToeMove;

    fn find_all_moves(&self) -> Vec<TicTacToeMove> {
        if self.game_over() {
            return Vec::new();
        }

        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| TicTacToeMove { row, col }))
            .filter(|m| self.board[m.row][m.col].is_none())
            .collect()
    }

    fn game_over(&self) -> bool {
        self.winner().is_some() || grid_full(&self.board)
    }

    fn value(&self) -> Result<Outcome, StateError> {
        if !self.game_over() {
            return Err(StateError::NotTerminal);
        }
        Ok(match self.winner() {
            Some(mark) => Outcome::win_for(mark.side()),
            None => Outcome::Draw,
        })
    }

    fn do_move(&mut self, m: &TicTacToeMove) -> bool {
        if self.game_over()
            || m.row >= BOARD_SIZE
            || m.col >= BOARD_SIZE
            || self.board[m.row][m.col].is_some()
        {
            return false;
        }
        self.board[m.row][m.col] = Some(Mark::for_side(self.to_move));
        self.to_move = self.to_move.opponent();
        true
    }

    fn undo_move(&mut self, m: &TicTacToeMove) {
        if let Some(cell) = self.board.get_mut(m.row).and_then(|r| r.get_mut(m.col)) {
            *cell = None;
            self.to_move = self.to_move.opponent();
        }
    }

    fn side_to_move(&self) -> Side {
        self.to_move
    }
}

impl fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const BAR: &str = " -------------";
        writeln!(f, "{BAR}")?;
        for row in &self.board {
            for cell in row {
                match cell {
                    Some(mark) => write!(f, " | {mark}")?,
                    None => write!(f, " |  ")?,
                }
            }
            writeln!(f, " |")?;
            writeln!(f, "{BAR}")?;
        }
        Ok(())
    }
}

/// TicTacToe move: place the mover's mark at `(row, col)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToeMove {
    pub row: usize,
    pub col: usize,
}

impl TicTacToeMove {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for TicTacToeMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {} column {}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests;

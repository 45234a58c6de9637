use std::fmt;

use super::{Board, Player};
use crate::error::{DimensionError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Owns one game: the board, whose turn it is, and the rules deciding
/// legality and outcome.
///
/// The outcome is recomputed from the board on every query, so the engine
/// carries no state beyond the grid and the turn counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEngine {
    board: Board,
    turn: usize,
}

impl BoardEngine {
    /// Create an engine with an empty `rows` x `columns` board.
    pub fn new(rows: usize, columns: usize) -> Result<Self, DimensionError> {
        Ok(BoardEngine {
            board: Board::new(rows, columns)?,
            turn: 0,
        })
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn columns(&self) -> usize {
        self.board.columns()
    }

    /// Number of successful moves since the last reset
    pub fn turn_count(&self) -> usize {
        self.turn
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Independent copy of the current board
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Player to move, or `None` once the game has ended
    pub fn current_player(&self) -> Option<Player> {
        if self.is_game_over() {
            None
        } else {
            Some(Player::for_turn(self.turn))
        }
    }

    pub fn winner(&self) -> Option<Player> {
        self.board.winner()
    }

    pub fn is_game_over(&self) -> bool {
        self.winner().is_some() || self.board.is_full()
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winner() {
            Some(player) => Some(GameOutcome::Winner(player)),
            None if self.board.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }

    /// Columns that still accept a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_game_over() {
            return Vec::new();
        }

        (0..self.columns())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column` and pass the turn.
    ///
    /// Returns the row the piece landed in. A rejected move, including any
    /// move after the game has ended, leaves the engine untouched.
    pub fn apply_move(&mut self, column: usize) -> Result<usize, MoveError> {
        let player = self.current_player().ok_or(MoveError::GameOver)?;
        let row = self.board.drop_piece(column, player)?;
        self.turn += 1;
        Ok(row)
    }

    /// Clear the board and hand the first move back to red
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = 0;
    }
}

impl fmt::Display for BoardEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}

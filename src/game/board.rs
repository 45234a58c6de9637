use std::fmt;

use super::Player;
use crate::error::{DimensionError, MoveError, MIN_DIMENSION};

/// A single board position: empty, or holding one player's piece.
pub type Cell = Option<Player>;

/// Number of same-colored pieces in a line that wins the game.
pub const CONNECT: usize = 4;

/// Rectangular grid of cells. Row 0 is the top, row `rows - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, columns: usize) -> Result<Self, DimensionError> {
        if rows < MIN_DIMENSION || columns < MIN_DIMENSION {
            return Err(DimensionError::InvalidDimensions { rows, columns });
        }
        Ok(Board {
            rows,
            columns,
            cells: vec![None; rows * columns],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the cell at a specific position. Panics off the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.rows && col < self.columns,
            "cell ({row}, {col}) is off a {}x{} board",
            self.rows,
            self.columns
        );
        self.cells[row * self.columns + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.columns + col] = cell;
    }

    /// Iterate over rows from top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns)
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.columns {
            return true;
        }
        self.get(0, col).is_some()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.columns {
            return Err(MoveError::OutOfBounds);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Occupied cells are stacked from the bottom, so the first empty
        // cell from the bottom is the landing spot.
        let row = (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col).is_none())
            .ok_or(MoveError::ColumnFull)?;
        self.set(row, col, Some(player));
        Ok(row)
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|col| self.is_column_full(col))
    }

    /// Scan the whole board for four in a row.
    ///
    /// Orientations are checked in order: horizontal, vertical, diagonal
    /// down-right, then diagonal up-right from the bottom row. The first line
    /// found decides the result.
    pub fn winner(&self) -> Option<Player> {
        let span = CONNECT - 1;

        // Horizontal
        for row in 0..self.rows {
            for col in 0..self.columns - span {
                if let Some(p) = self.line(row, col, 0, 1) {
                    return Some(p);
                }
            }
        }

        // Vertical
        for col in 0..self.columns {
            for row in 0..self.rows - span {
                if let Some(p) = self.line(row, col, 1, 0) {
                    return Some(p);
                }
            }
        }

        // Diagonal \
        for row in 0..self.rows - span {
            for col in 0..self.columns - span {
                if let Some(p) = self.line(row, col, 1, 1) {
                    return Some(p);
                }
            }
        }

        // Diagonal /
        for row in (span..self.rows).rev() {
            for col in 0..self.columns - span {
                if let Some(p) = self.line(row, col, -1, 1) {
                    return Some(p);
                }
            }
        }

        None
    }

    /// The player owning all `CONNECT` cells starting at (row, col) and
    /// stepping by (d_row, d_col). Callers keep the line on the board.
    fn line(&self, row: usize, col: usize, d_row: isize, d_col: isize) -> Option<Player> {
        let first = self.get(row, col)?;
        let owns_all = (1..CONNECT as isize).all(|step| {
            let r = (row as isize + d_row * step) as usize;
            let c = (col as isize + d_col * step) as usize;
            self.get(r, c) == Some(first)
        });
        owns_all.then_some(first)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(self.columns * 4 - 1);
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f, "{rule}")?;
            }
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or(' ', Player::symbol).to_string())
                .collect();
            writeln!(f, " {}", line.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a board from text rows (top first): 'R', 'Y' or '.'.
    /// Cells are placed directly, so gravity is not enforced.
    fn seeded(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len(), rows[0].len()).unwrap();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'R' => Some(Player::Red),
                    'Y' => Some(Player::Yellow),
                    _ => None,
                };
                board.set(r, c, cell);
            }
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6, 7).unwrap();
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.get(row, col), None);
            }
        }
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_rejects_small_dimensions() {
        assert_eq!(
            Board::new(3, 7),
            Err(DimensionError::InvalidDimensions { rows: 3, columns: 7 })
        );
        assert!(Board::new(6, 3).is_err());
        assert!(Board::new(4, 4).is_ok());
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new(6, 7).unwrap();

        let row = board.drop_piece(3, Player::Red).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Some(Player::Red));

        let row = board.drop_piece(3, Player::Yellow).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Some(Player::Yellow));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new(6, 7).unwrap();
        for _ in 0..6 {
            board.drop_piece(0, Player::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.drop_piece(0, Player::Yellow), Err(MoveError::ColumnFull));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new(6, 7).unwrap();
        assert_eq!(board.drop_piece(7, Player::Red), Err(MoveError::OutOfBounds));
        assert!(board.is_column_full(7));
    }

    #[test]
    #[should_panic(expected = "off a 6x7 board")]
    fn test_get_off_board_column_panics() {
        let mut board = Board::new(6, 7).unwrap();
        board.drop_piece(0, Player::Red).unwrap();
        // (4, 7) would land on (5, 0) in the flat grid
        board.get(4, 7);
    }

    #[test]
    #[should_panic(expected = "off a 6x7 board")]
    fn test_get_off_board_row_panics() {
        let board = Board::new(6, 7).unwrap();
        board.get(6, 0);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(4, 5).unwrap();
        for col in 0..5 {
            for _ in 0..4 {
                board.drop_piece(col, Player::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.occupied(), 20);
    }

    #[test]
    fn test_horizontal_win() {
        let board = seeded(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "..YYYY.",
        ]);
        assert_eq!(board.winner(), Some(Player::Yellow));
    }

    #[test]
    fn test_vertical_win() {
        let board = seeded(&[
            ".......",
            ".......",
            "......R",
            "......R",
            "......R",
            "......R",
        ]);
        assert_eq!(board.winner(), Some(Player::Red));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let board = seeded(&[
            ".......",
            ".......",
            "R......",
            "YR.....",
            "YYR....",
            "YYYR...",
        ]);
        assert_eq!(board.winner(), Some(Player::Red));
    }

    #[test]
    fn test_diagonal_up_right_win() {
        let board = seeded(&[
            ".......",
            ".......",
            "......Y",
            ".....YR",
            "....YRR",
            "...YRRR",
        ]);
        assert_eq!(board.winner(), Some(Player::Yellow));
    }

    #[test]
    fn test_diagonal_win_at_far_corner() {
        let board = seeded(&[
            "...R",
            "..R.",
            ".R..",
            "R...",
        ]);
        assert_eq!(board.winner(), Some(Player::Red));
    }

    #[test]
    fn test_no_win_with_three() {
        let board = seeded(&[
            "....",
            "....",
            "R...",
            "RRR.",
        ]);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let board = seeded(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "RRYRR..",
        ]);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_horizontal_scanned_before_vertical() {
        let board = seeded(&[
            "YRRRR",
            "Y....",
            "Y....",
            "Y....",
        ]);
        // Both a red row and a yellow column; rows are scanned first.
        assert_eq!(board.winner(), Some(Player::Red));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(4, 4).unwrap();
        board.drop_piece(0, Player::Red).unwrap();
        board.drop_piece(1, Player::Yellow).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "-".repeat(15));
        assert_eq!(lines[6], " R | Y |   |  ");
    }
}

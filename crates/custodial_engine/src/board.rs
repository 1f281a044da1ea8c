//! Board utilities and helper functions
//!
//! Provides the fundamental board operations used throughout the engine:
//! - Starting layout
//! - Cell queries and updates
//! - Piece counting

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::constants::*;
use crate::types::*;

impl Board {
    /// A board with no pieces on it
    pub fn empty() -> Board {
        Board::default()
    }

    /// An empty board with the given pieces placed on it
    ///
    /// Later entries overwrite earlier ones on the same cell.
    pub fn with_pieces(pieces: &[(Position, Color)]) -> Board {
        let mut board = Board::empty();
        for &(pos, color) in pieces {
            board.set(pos, Cell::Occupied(color));
        }
        board
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.y() as usize][pos.x() as usize]
    }

    #[inline]
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.y() as usize][pos.x() as usize] = cell;
    }

    /// Rows of the grid, row 0 first
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Every position paired with its cell, row by row
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::all().map(move |pos| (pos, self.get(pos)))
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        &self.cells[pos.y() as usize][pos.x() as usize]
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.cells[pos.y() as usize][pos.x() as usize]
    }
}

/// One line per row, `B`/`W`/`.` per cell, row 0 first
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let c = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(Color::Black) => 'B',
                    Cell::Occupied(Color::White) => 'W',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Initialize a board to the starting position
///
/// Row 0 is filled with Black, row 7 with White, everything else is empty.
pub fn init_board() -> Board {
    let mut board = Board::empty();
    board.cells[BLACK_HOME_ROW] = [Cell::Occupied(Color::Black); BOARD_SIZE];
    board.cells[WHITE_HOME_ROW] = [Cell::Occupied(Color::White); BOARD_SIZE];
    board
}

/// Get the contents of a cell
#[inline]
pub fn cell_at(board: &Board, pos: Position) -> Cell {
    board.get(pos)
}

/// Count the pieces of each side
///
/// Scans all 64 cells. Used for the piece counters shown next to the board.
pub fn piece_counts(board: &Board) -> PieceCounts {
    board
        .iter()
        .fold(PieceCounts::default(), |mut counts, (_, cell)| {
            match cell {
                Cell::Occupied(Color::Black) => counts.black += 1,
                Cell::Occupied(Color::White) => counts.white += 1,
                Cell::Empty => {}
            }
            counts
        })
}

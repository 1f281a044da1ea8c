//! Game state queries
//!
//! Read-only accessors used by the presentation layer to draw the board, the
//! selection highlight, move hints, the turn label and the piece counters.

use crate::board::{cell_at, piece_counts};
use crate::config::GameConfig;
use crate::error::EngineResult;
use crate::move_gen::legal_destinations;
use crate::types::*;

impl Game {
    /// Copy of the current board
    pub fn board_snapshot(&self) -> Board {
        self.board
    }

    /// Borrow the current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move next
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Currently selected piece, if any
    pub fn selected(&self) -> Option<Position> {
        self.selection.position()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Contents of `pos`
    pub fn cell_at(&self, pos: Position) -> Cell {
        cell_at(&self.board, pos)
    }

    /// Contents of the cell at raw coordinates
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::OutOfBounds`] if `(x, y)` is off the board.
    pub fn cell_at_xy(&self, x: i32, y: i32) -> EngineResult<Cell> {
        Ok(self.cell_at(Position::new(x, y)?))
    }

    /// Number of pieces each side still has
    pub fn piece_counts(&self) -> PieceCounts {
        piece_counts(&self.board)
    }

    /// Turn label, e.g. `"Black's turn"`
    pub fn turn_text(&self) -> String {
        format!("{}'s turn", self.current_player)
    }

    /// Legal destinations for the selected piece
    ///
    /// Empty while nothing is selected.
    pub fn selected_destinations(&self) -> Vec<Position> {
        match self.selection {
            Selection::Idle => Vec::new(),
            Selection::PieceSelected(from) => {
                legal_destinations(&self.board, from, self.current_player)
            }
        }
    }
}

//! # Core Types
//!
//! Value types shared by every part of the engine.
//!
//! ## Board Representation
//!
//! The board is a fixed `[[Cell; 8]; 8]` grid indexed `[y][x]`, so row 0 is the
//! Black home rank and row 7 is the White home rank. A `Cell` is either empty
//! or holds one piece of a given `Color`; there are no piece types.
//!
//! ## Positions Are Always On The Board
//!
//! A `Position` can only be built through [`Position::new`] (or `TryFrom`),
//! which rejects anything outside `0..8`. Every board access therefore takes a
//! `Position` and can index the grid directly. Controllers that hold raw
//! integers get an [`EngineError::OutOfBounds`] at the boundary instead of a
//! silently clamped or defaulted cell.
//!
//! ## Move Outcomes
//!
//! [`MoveOutcome`] tells the presentation layer exactly what a click did:
//! which piece got selected, or which piece moved where and what it captured.
//! That is enough to drive either an animated or an instant renderer.

use std::fmt;

use crate::config::GameConfig;
use crate::constants::BOARD_SIZE;
use crate::error::{EngineError, EngineResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side owning a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other side
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("Black"),
            Color::White => f.write_str("White"),
        }
    }
}

/// Contents of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Color),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Color of the piece in this cell, if any
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(color) => Some(color),
        }
    }

    /// Check if this cell holds a piece of `color`
    #[inline]
    pub fn is_occupied_by(self, color: Color) -> bool {
        self == Cell::Occupied(color)
    }
}

/// A cell coordinate, guaranteed to lie on the board
///
/// `x` is the column and `y` the row, both in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(i32, i32)", into = "(i32, i32)"))]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Build a position from raw coordinates
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if either coordinate is outside `0..8`.
    pub fn new(x: i32, y: i32) -> EngineResult<Position> {
        if is_on_board(x, y) {
            Ok(Position {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(EngineError::OutOfBounds { x, y })
        }
    }

    #[inline]
    pub fn x(self) -> u8 {
        self.x
    }

    #[inline]
    pub fn y(self) -> u8 {
        self.y
    }

    /// Position shifted by `(dx, dy)`, or `None` if that leaves the board
    pub fn offset(self, dx: i32, dy: i32) -> Option<Position> {
        Position::new(self.x as i32 + dx, self.y as i32 + dy).ok()
    }

    /// Iterate over all 64 positions, row by row
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8).flat_map(|y| (0..BOARD_SIZE as u8).map(move |x| Position { x, y }))
    }
}

/// Check if raw coordinates lie on the board
#[inline]
pub fn is_on_board(x: i32, y: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&x) && (0..BOARD_SIZE as i32).contains(&y)
}

impl TryFrom<(i32, i32)> for Position {
    type Error = EngineError;

    fn try_from((x, y): (i32, i32)) -> EngineResult<Position> {
        Position::new(x, y)
    }
}

impl From<Position> for (i32, i32) {
    fn from(pos: Position) -> (i32, i32) {
        (pos.x as i32, pos.y as i32)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The 8x8 grid of cells, indexed `[y][x]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

/// Complete state of one game session
///
/// Owns the board, the side to move and the pending selection. Created by
/// [`crate::api::new_game`] and mutated only through the engine's own
/// operations; callers read it through the accessors in [`crate::api`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) current_player: Color,
    pub(crate) selection: Selection,
    pub(crate) config: GameConfig,
}

/// Number of pieces each side has on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceCounts {
    pub black: usize,
    pub white: usize,
}

impl PieceCounts {
    #[inline]
    pub fn total(&self) -> usize {
        self.black + self.white
    }

    /// Count for one side
    pub fn of(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

/// Selection phase of the current turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Selection {
    /// Waiting for the player to pick one of their pieces
    #[default]
    Idle,

    /// A piece has been picked and awaits a destination
    PieceSelected(Position),
}

impl Selection {
    /// Selected position, if any
    pub fn position(&self) -> Option<Position> {
        match self {
            Selection::Idle => None,
            Selection::PieceSelected(pos) => Some(*pos),
        }
    }
}

/// What a single `select_or_move` call did
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveOutcome {
    /// A piece of the player to move was picked
    Selected(Position),

    /// The selected piece moved and any flanked opponents were removed
    Moved {
        from: Position,
        to: Position,
        captured: Vec<Position>,
    },

    /// The pending selection was dropped without touching the board
    Deselected,

    /// Nothing happened
    Ignored,
}

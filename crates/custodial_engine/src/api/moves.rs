//! Selection state machine and move execution
//!
//! Every click from the controller goes through [`Game::select_or_move`]:
//!
//! | State                 | Click on                    | Result                         |
//! |-----------------------|-----------------------------|--------------------------------|
//! | `Idle`                | own piece                   | `Selected`, now `PieceSelected`|
//! | `Idle`                | anything else               | `Ignored`, still `Idle`        |
//! | `PieceSelected(from)` | legal destination           | `Moved`, turn passes, `Idle`   |
//! | `PieceSelected(from)` | anything else               | `Deselected`, `Idle`           |
//!
//! A completed move applies the move, resolves captures and flips the player
//! in one call. Rejected clicks never touch the board or the player.

use tracing::{debug, trace};

use crate::capture::resolve_captures;
use crate::error::EngineResult;
use crate::move_gen::is_legal_move;
use crate::types::*;

/// Move the piece at `from` to `to`
///
/// Copies the origin cell onto the destination and empties the origin.
///
/// # Validation
///
/// This function does not validate move legality. Use
/// [`crate::move_gen::is_legal_move`] first.
pub fn apply_move(board: &mut Board, from: Position, to: Position) {
    board[to] = board[from];
    board[from] = Cell::Empty;
}

impl Game {
    /// Handle one click at `pos`
    ///
    /// See the module docs for the transition table.
    pub fn select_or_move(&mut self, pos: Position) -> MoveOutcome {
        match self.selection {
            Selection::Idle => self.try_select(pos),
            Selection::PieceSelected(from) => {
                self.selection = Selection::Idle;
                self.try_move(from, pos)
            }
        }
    }

    /// Handle one click at raw board coordinates
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::OutOfBounds`] if `(x, y)` is off the board.
    /// The game state is left untouched in that case.
    pub fn click(&mut self, x: i32, y: i32) -> EngineResult<MoveOutcome> {
        let pos = Position::new(x, y)?;
        Ok(self.select_or_move(pos))
    }

    fn try_select(&mut self, pos: Position) -> MoveOutcome {
        if self.board[pos].is_occupied_by(self.current_player) {
            self.selection = Selection::PieceSelected(pos);
            debug!("[MOVE] {} selected piece at {}", self.current_player, pos);
            MoveOutcome::Selected(pos)
        } else {
            trace!(
                "[MOVE] Ignored click at {} ({:?}), {} to move",
                pos,
                self.board[pos],
                self.current_player
            );
            MoveOutcome::Ignored
        }
    }

    fn try_move(&mut self, from: Position, to: Position) -> MoveOutcome {
        let mover = self.current_player;

        if !is_legal_move(&self.board, from, to, mover) {
            trace!("[MOVE] Rejected {} -> {} for {}, selection cleared", from, to, mover);
            return MoveOutcome::Deselected;
        }

        apply_move(&mut self.board, from, to);
        let captured = resolve_captures(&mut self.board, to, mover);
        self.current_player = mover.opponent();

        if captured.is_empty() {
            debug!("[MOVE] {} moved {} -> {}", mover, from, to);
        } else {
            debug!(
                "[MOVE] {} moved {} -> {}, captured {:?}",
                mover, from, to, captured
            );
        }

        MoveOutcome::Moved { from, to, captured }
    }
}

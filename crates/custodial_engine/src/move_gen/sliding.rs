//! Sliding movement
//!
//! Walks cell by cell along a row or column. Used both to check that a
//! requested move does not jump over anything and to list every destination
//! a selected piece could reach.

use super::validation::is_legal_move;
use crate::board::cell_at;
use crate::constants::ORTHOGONAL_DIRECTIONS;
use crate::types::*;

/// Check that every cell strictly between `from` and `to` is empty
///
/// `from` and `to` must share a row or column; the step along the moving axis
/// is the sign of the difference and the other axis does not move. The
/// destination itself is not inspected. A zero-length pair has no cells in
/// between and is therefore clear.
pub fn is_path_clear(board: &Board, from: Position, to: Position) -> bool {
    debug_assert!(
        from.x() == to.x() || from.y() == to.y(),
        "path check on non-orthogonal pair {} -> {}",
        from,
        to
    );

    let dx = (to.x() as i32 - from.x() as i32).signum();
    let dy = (to.y() as i32 - from.y() as i32).signum();

    let mut current = from;
    loop {
        let Some(next) = current.offset(dx, dy) else {
            return true;
        };
        if next == to {
            return true;
        }
        if !cell_at(board, next).is_empty() {
            return false;
        }
        current = next;
    }
}

/// All positions the piece at `from` may legally move to
///
/// Returns an empty list if `from` does not hold a piece of `player`.
/// Destinations are grouped by ray, nearest first.
pub fn legal_destinations(board: &Board, from: Position, player: Color) -> Vec<Position> {
    let mut destinations = Vec::new();

    if !cell_at(board, from).is_occupied_by(player) {
        return destinations;
    }

    for &(dx, dy) in &ORTHOGONAL_DIRECTIONS {
        let mut current = from;
        while let Some(next) = current.offset(dx, dy) {
            if !cell_at(board, next).is_empty() {
                break;
            }
            debug_assert!(is_legal_move(board, from, next, player));
            destinations.push(next);
            current = next;
        }
    }

    destinations
}

//! Move validation
//!
//! Pure predicates deciding whether a single move may be played. None of
//! these touch the board.

use super::sliding::is_path_clear;
use crate::board::cell_at;
use crate::types::*;

/// Check if two positions share a row or a column
///
/// A zero-length pair satisfies this trivially. [`is_legal_move`] rejects it
/// separately.
#[inline]
pub fn is_orthogonal_move(from: Position, to: Position) -> bool {
    from.x() == to.x() || from.y() == to.y()
}

/// Check if `player` may move the piece at `from` to `to`
///
/// Validates that:
/// - The move is not a no-op (`from != to`)
/// - The destination is empty
/// - The move runs along a single row or column
/// - Every cell strictly between the two is empty
/// - The piece at `from` belongs to `player`
pub fn is_legal_move(board: &Board, from: Position, to: Position, player: Color) -> bool {
    if from == to {
        return false;
    }

    if !cell_at(board, to).is_empty() {
        return false;
    }

    if !is_orthogonal_move(from, to) {
        return false;
    }

    if !is_path_clear(board, from, to) {
        return false;
    }

    cell_at(board, from).is_occupied_by(player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::init_board;

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn test_orthogonal_predicate() {
        assert!(is_orthogonal_move(pos(2, 2), pos(2, 6)));
        assert!(is_orthogonal_move(pos(2, 2), pos(7, 2)));
        assert!(is_orthogonal_move(pos(2, 2), pos(2, 2)));
        assert!(!is_orthogonal_move(pos(2, 2), pos(3, 3)));
        assert!(!is_orthogonal_move(pos(0, 0), pos(1, 7)));
    }

    #[test]
    fn test_zero_length_move_rejected() {
        let board = Board::with_pieces(&[(pos(4, 4), Color::Black)]);
        assert!(!is_legal_move(&board, pos(4, 4), pos(4, 4), Color::Black));
    }

    #[test]
    fn test_wrong_owner_rejected() {
        let board = init_board();
        assert!(is_legal_move(&board, pos(0, 0), pos(0, 3), Color::Black));
        assert!(!is_legal_move(&board, pos(0, 0), pos(0, 3), Color::White));
    }

    #[test]
    fn test_empty_origin_rejected() {
        let board = init_board();
        assert!(!is_legal_move(&board, pos(3, 3), pos(3, 4), Color::Black));
    }
}

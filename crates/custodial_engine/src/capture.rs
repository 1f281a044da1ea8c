//! Custodial capture rules
//!
//! Capture pattern: `M-O-M` along a row or column, where the first `M` is the
//! piece that just landed, `O` is an opponent piece and the second `M` is
//! another of the mover's pieces already on the board.
//!
//! Only the piece that moved can capture, and only on the mover's turn. All
//! four directions are read from the same post-move board; a removed piece
//! never triggers further captures.

use crate::board::cell_at;
use crate::constants::ORTHOGONAL_DIRECTIONS;
use crate::types::*;

/// Find positions captured by a piece of `mover` that has just landed on `landed`
///
/// # Arguments
/// * `board` - Board after the move has been applied
/// * `landed` - Destination of the move
/// * `mover` - Color of the player who moved
///
/// # Returns
/// Captured positions in direction order `(0,1), (1,0), (0,-1), (-1,0)`.
/// The board is not modified.
pub fn find_captures(board: &Board, landed: Position, mover: Color) -> Vec<Position> {
    let opponent = mover.opponent();

    ORTHOGONAL_DIRECTIONS
        .iter()
        .filter_map(|&(dx, dy)| {
            let mid = landed.offset(dx, dy)?;
            let end = landed.offset(dx * 2, dy * 2)?;

            (cell_at(board, mid).is_occupied_by(opponent) && cell_at(board, end).is_occupied_by(mover))
                .then_some(mid)
        })
        .collect()
}

/// Remove every captured piece from the board
pub fn apply_captures(board: &mut Board, captured: &[Position]) {
    for &pos in captured {
        board.set(pos, Cell::Empty);
    }
}

/// Find and remove the pieces captured by a move landing on `landed`
///
/// Returns the captured positions, see [`find_captures`].
pub fn resolve_captures(board: &mut Board, landed: Position, mover: Color) -> Vec<Position> {
    let captured = find_captures(board, landed, mover);
    apply_captures(board, &captured);
    captured
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn test_vertical_sandwich() {
        let mut board = Board::with_pieces(&[
            (pos(3, 4), Color::Black),
            (pos(3, 5), Color::White),
            (pos(3, 6), Color::Black),
        ]);
        let captured = resolve_captures(&mut board, pos(3, 4), Color::Black);
        assert_eq!(captured, vec![pos(3, 5)]);
        assert!(board[pos(3, 5)].is_empty());
        assert_eq!(board[pos(3, 6)], Cell::Occupied(Color::Black));
    }

    #[test]
    fn test_no_capture_without_backing_piece() {
        let board = Board::with_pieces(&[(pos(3, 4), Color::Black), (pos(3, 5), Color::White)]);
        assert!(find_captures(&board, pos(3, 4), Color::Black).is_empty());
    }

    #[test]
    fn test_two_opponents_in_a_row_are_safe() {
        let board = Board::with_pieces(&[
            (pos(1, 2), Color::White),
            (pos(2, 2), Color::Black),
            (pos(3, 2), Color::Black),
            (pos(4, 2), Color::White),
        ]);
        assert!(find_captures(&board, pos(1, 2), Color::White).is_empty());
    }

    #[test]
    fn test_no_self_capture() {
        // A black piece landing between two whites is not removed
        let board = Board::with_pieces(&[
            (pos(2, 3), Color::White),
            (pos(3, 3), Color::Black),
            (pos(4, 3), Color::White),
        ]);
        assert!(find_captures(&board, pos(3, 3), Color::Black).is_empty());
    }

    #[test]
    fn test_multiple_captures_in_direction_order() {
        let center = pos(4, 4);
        let mut board = Board::with_pieces(&[
            (center, Color::White),
            (pos(4, 5), Color::Black),
            (pos(4, 6), Color::White),
            (pos(5, 4), Color::Black),
            (pos(6, 4), Color::White),
            (pos(3, 4), Color::Black),
            (pos(2, 4), Color::White),
        ]);
        let captured = resolve_captures(&mut board, center, Color::White);
        assert_eq!(captured, vec![pos(4, 5), pos(5, 4), pos(3, 4)]);
        for p in &captured {
            assert!(board[*p].is_empty());
        }
    }

    #[test]
    fn test_capture_window_off_board_is_skipped() {
        let board = Board::with_pieces(&[(pos(0, 6), Color::White), (pos(0, 7), Color::Black)]);
        assert!(find_captures(&board, pos(0, 6), Color::White).is_empty());
    }
}

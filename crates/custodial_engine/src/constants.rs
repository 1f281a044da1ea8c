//! Engine constants
//!
//! Board geometry and the fixed direction set used by capture resolution.

/// Width and height of the square board
pub const BOARD_SIZE: usize = 8;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Row filled with Black pieces at game start
pub const BLACK_HOME_ROW: usize = 0;

/// Row filled with White pieces at game start
pub const WHITE_HOME_ROW: usize = BOARD_SIZE - 1;

/// Orthogonal unit steps, in the order captures are evaluated and reported
pub const ORTHOGONAL_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

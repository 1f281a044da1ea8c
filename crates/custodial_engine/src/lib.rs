//! Rule engine for an 8x8 custodial capture game
//!
//! Two players, Black and White, start with a full home row each. A piece
//! slides any distance along its row or column through empty cells and stops
//! on an empty cell. A move that sandwiches a lone opposing piece between the
//! moved piece and another friendly piece removes it.
//!
//! # Architecture
//!
//! The engine owns no globals. A [`Game`] value holds the board, the side to
//! move and the pending selection; the controller feeds clicks into
//! [`Game::select_or_move`] and renders whatever [`MoveOutcome`] comes back.
//! Every call is synchronous and all-or-nothing, so a renderer may animate the
//! outcome at its own pace without affecting correctness.
//!
//! ```rust
//! use custodial_engine::{new_game, Color, MoveOutcome, Position};
//!
//! let mut game = new_game();
//! let from = Position::new(2, 0)?;
//! let to = Position::new(2, 4)?;
//!
//! assert_eq!(game.select_or_move(from), MoveOutcome::Selected(from));
//! assert!(matches!(game.select_or_move(to), MoveOutcome::Moved { .. }));
//! assert_eq!(game.current_player(), Color::White);
//! # Ok::<(), custodial_engine::EngineError>(())
//! ```
//!
//! # Module Structure
//!
//! - `types` - Colors, cells, positions, the board and move outcomes
//! - `board` - Starting layout, cell access and piece counting
//! - `move_gen` - Orthogonality, path clearance and move legality
//! - `capture` - Custodial capture resolution
//! - `api` - Game lifecycle, the selection state machine and state queries
//! - `config` - Per-game settings
//! - `error` - The out-of-bounds error

pub mod api;
pub mod board;
pub mod capture;
pub mod config;
pub mod constants;
pub mod error;
pub mod move_gen;
pub mod types;


pub use api::{apply_move, new_game, reset_game};
pub use board::{cell_at, init_board, piece_counts};
pub use capture::{find_captures, resolve_captures};
pub use config::GameConfig;
pub use error::{EngineError, EngineResult};
pub use move_gen::{is_legal_move, is_orthogonal_move, is_path_clear, legal_destinations};
pub use types::{Board, Cell, Color, Game, MoveOutcome, PieceCounts, Position, Selection};

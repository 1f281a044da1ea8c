//! Public API for the rule engine
//!
//! Provides the entry points used by an interaction controller and a
//! presentation layer.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, reset_game)
//! - `moves` - Selection state machine and move application (select_or_move, apply_move)
//! - `state` - Read-only queries (board snapshot, player to move, counters)

mod game;
mod moves;
mod state;

pub use game::{new_game, reset_game};
pub use moves::apply_move;

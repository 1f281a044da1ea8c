//! Game lifecycle management
//!
//! Functions for creating and resetting games.

use tracing::debug;

use crate::board::init_board;
use crate::config::GameConfig;
use crate::types::*;

/// Create a new game with the initial position and Black to move
pub fn new_game() -> Game {
    Game::with_config(GameConfig::default())
}

/// Reset the game to the starting position
///
/// Restores the initial board, hands the turn back to the configured
/// starting player and drops any pending selection.
pub fn reset_game(game: &mut Game) {
    game.board = init_board();
    game.current_player = game.config.starting_player;
    game.selection = Selection::Idle;
    debug!("[GAME] Reset, {} to move", game.current_player);
}

impl Game {
    pub fn new() -> Game {
        new_game()
    }

    /// Create a new game with the initial position using `config`
    pub fn with_config(config: GameConfig) -> Game {
        let game = Game {
            board: init_board(),
            current_player: config.starting_player,
            selection: Selection::Idle,
            config,
        };
        debug!("[GAME] New game, {} to move", game.current_player);
        game
    }

    /// Start from an arbitrary position with `to_move` to play
    ///
    /// Useful for setting up puzzles and test scenarios. The selection starts
    /// idle.
    pub fn from_board(board: Board, to_move: Color) -> Game {
        Game {
            board,
            current_player: to_move,
            selection: Selection::Idle,
            config: GameConfig {
                starting_player: to_move,
            },
        }
    }

    /// See [`reset_game`]
    pub fn reset(&mut self) {
        reset_game(self);
    }
}

impl Default for Game {
    fn default() -> Self {
        new_game()
    }
}

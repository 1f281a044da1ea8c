//! Game configuration
//!
//! Settings chosen when a game is created. The defaults reproduce the
//! standard game, where Black moves first.
//!
//! With the `serde` feature enabled, the config can be loaded from any
//! serde format by the surrounding application:
//!
//! ```rust,ignore
//! let config: GameConfig = serde_json::from_str(r#"{ "starting_player": "White" }"#)?;
//! let game = Game::with_config(config);
//! ```

use crate::types::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings for a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Side that makes the first move
    pub starting_player: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_player: Color::Black,
        }
    }
}

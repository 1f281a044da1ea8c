//! Error types for the rule engine
//!
//! Rejected moves and selections are ordinary outcomes, not errors. The only
//! failure the engine reports is a coordinate that falls outside the board,
//! which means the calling controller has a bug.

use thiserror::Error;

/// Errors that can occur in the rule engine
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Coordinate pair outside the 8x8 board
    #[error("Position ({x}, {y}) is off the board (coordinates must be 0-7)")]
    OutOfBounds { x: i32, y: i32 },
}

/// Result type alias for rule engine operations
pub type EngineResult<T> = Result<T, EngineError>;

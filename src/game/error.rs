//! Error types for game module
//!
//! Provides error types for building positions from external input (square
//! keys, piece codes, FEN strings). Diffing and transition tracking never fail.

use crate::rendering::error::BoardError;

/// Errors that can occur while constructing a position
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// Malformed square key or piece code
    #[error(transparent)]
    Board(#[from] BoardError),

    /// FEN piece placement could not be decoded
    #[error("Invalid FEN {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: String },
}

/// Result type alias for position construction
pub type PositionResult<T> = Result<T, PositionError>;

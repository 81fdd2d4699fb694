//! Error types for rendering module
//!
//! Covers malformed board coordinates and piece codes. These indicate a data
//! integrity bug in the caller and are propagated rather than papered over.

use thiserror::Error;

/// Errors that can occur while addressing squares or decoding pieces
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Square name is not a file letter `a`-`h` followed by a rank digit `1`-`8`
    #[error("Invalid square: {square:?} (expected a1-h8)")]
    InvalidSquare { square: String },

    /// File or rank index outside the 0-7 range
    #[error("Square index out of range: file {file}, rank {rank} (must be 0-7)")]
    SquareIndexOutOfRange { file: u8, rank: u8 },

    /// Piece code is not a colour prefix (`w`/`b`) followed by a piece letter
    #[error("Invalid piece code: {code:?}")]
    InvalidPiece { code: String },
}

/// Result type alias for board addressing operations
pub type BoardResult<T> = Result<T, BoardError>;

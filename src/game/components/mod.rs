//! Board state data
//!
//! Pure data with no rendering or transition logic: the [`Position`] snapshot
//! and its FEN conversion.

pub mod fen;
pub mod position;


// Re-export all components for convenience
pub use fen::*;
pub use position::*;

//! Rendering module - board addressing and screen geometry
//!
//! Everything the transition engine needs to talk about the board in the
//! presentation layer's terms, without owning any rendering itself.
//!
//! # Architecture
//!
//! - `utils` - [`Square`] addressing and algebraic notation
//! - `board` - Square ⇄ pixel conversion for both board orientations
//! - `pieces` - [`Piece`] identifiers (colour × type)
//! - `error` - [`BoardError`] for malformed squares and piece codes
//!
//! All functions here are pure. Board width and orientation are passed in on
//! every call, or bundled in a [`BoardGeometry`].

// Submodules
pub mod board;
pub mod pieces;

// Root-level modules
pub mod error;
pub mod utils;

// Re-export commonly used items
pub use board::*;
pub use error::*;
pub use pieces::*;
pub use utils::*;

//! Piece identifiers shared by positions, diffs and transition records

pub mod pieces;

pub use pieces::*;

//! Stateless board computations
//!
//! - [`diff`] - Infers origin squares and captures between two positions
//!
//! Everything here is a pure function of its inputs; render-to-render state
//! lives in [`crate::game::resources`].

pub mod diff;

pub use diff::*;

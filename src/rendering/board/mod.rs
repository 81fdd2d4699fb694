//! Board geometry
//!
//! Pure conversions between squares and on-screen pixel offsets. See
//! [`coordinates`] for the orientation conventions.

pub mod coordinates;

pub use coordinates::*;

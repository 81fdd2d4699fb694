//! Position transition engine
//!
//! Infers how pieces moved between two board snapshots and turns that into
//! animation records for the presentation layer.
//!
//! # Module Organization
//!
//! - `components` - [`Position`](components::Position) snapshots and FEN conversion
//! - `systems` - The stateless [`diff`](systems::diff()) heuristic
//! - `resources` - Per-board state: [`BoardTransitions`](resources::BoardTransitions)
//!   and the one-shot suppression window
//! - `error` - [`PositionError`](error::PositionError)
//!
//! # Data Flow
//!
//! ```text
//! new Position ──► BoardTransitions::update
//!                    │ same as last different position? ──► cached records
//!                    │ suppressed? ──────────────────────► empty records
//!                    └─► diff vs last different position
//!                          └─► SquareGeometry ──► TransitionRecords
//! ```

pub mod components;
pub mod error;
pub mod resources;
pub mod systems;

pub use resources::BoardTransitions;

//! Per-board transition state
//!
//! State carried from one render to the next. Each board owns its own
//! instances; nothing in here is global.
//!
//! # Resources
//!
//! - [`BoardTransitions`] - Tracks the last different position, caches
//!   transition records and owns the suppression window
//! - [`TransitionSuppression`] - One-shot "do not infer the next change" flag
//! - [`TransitionRecords`] / [`SquareTransitionRecord`] - Screen-space output
//!   consumed by the presentation layer
//!
//! # Integration
//!
//! The presentation layer calls [`BoardTransitions::update`] once per render
//! with the position it is about to draw, and wraps drag-and-drop commits in
//! [`BoardTransitions::disable_transition_in_next_position`].

pub mod suppression;
pub mod transitions;


pub use suppression::*;
pub use transitions::*;

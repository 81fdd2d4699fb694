//! Transition suppression - one-shot override of the diff heuristic
//!
//! When the presentation layer already knows where a piece came from (the user
//! just dragged it) or knows the next change must not animate (a dropped move
//! was rejected), it suppresses inference for exactly one upcoming position
//! change. The window is anchored at the position rendered when suppression
//! was requested.
//!
//! # State transitions
//!
//! - `disable(anchor)` - always `Suppressed(anchor)`, replacing any prior anchor
//! - `enable()` - always `Active`
//! - `observe(previous, next)` - called once per structurally different position.
//!   The change is suppressed while leaving or returning to the anchor. Once
//!   `next` differs from both the anchor and `previous`, the window has elapsed
//!   and the state falls back to `Active` on its own.
//!
//! Re-renders of an unchanged position never reach `observe`, so they neither
//! consume nor extend the window.

use crate::game::components::Position;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TransitionSuppression {
    /// Diffs run normally
    #[default]
    Active,
    /// Next change away from `anchor` produces no transitions
    Suppressed { anchor: Position },
}

impl TransitionSuppression {
    /// Suppress the next position change away from `anchor`
    pub fn disable(&mut self, anchor: Position) {
        debug!("[SUPPRESSION] Suppressing next transition ({} pieces anchored)", anchor.len());
        *self = TransitionSuppression::Suppressed { anchor };
    }

    /// Cancel any pending suppression
    pub fn enable(&mut self) {
        if self.is_suppressed() {
            debug!("[SUPPRESSION] Pending suppression cancelled");
        }
        *self = TransitionSuppression::Active;
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, TransitionSuppression::Suppressed { .. })
    }

    pub fn anchor(&self) -> Option<&Position> {
        match self {
            TransitionSuppression::Active => None,
            TransitionSuppression::Suppressed { anchor } => Some(anchor),
        }
    }

    /// Record a change from `previous` to `next`
    ///
    /// Returns `true` when the change must not animate. Auto-clears the window
    /// once `next` is neither the anchor nor `previous`.
    pub fn observe(&mut self, previous: &Position, next: &Position) -> bool {
        let TransitionSuppression::Suppressed { anchor } = self else {
            return false;
        };

        let suppressed = anchor.structurally_eq(previous) || anchor.structurally_eq(next);

        if !anchor.structurally_eq(next) && !previous.structurally_eq(next) {
            debug!("[SUPPRESSION] Window elapsed, transitions re-enabled");
            *self = TransitionSuppression::Active;
        }

        suppressed
    }
}

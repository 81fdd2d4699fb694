//! Position diff - infers where each newly placed piece came from
//!
//! Parents usually hand the board a whole new position with no move attached.
//! To animate anything we have to guess, for every square whose occupant is
//! new, which square in the previous position that piece most plausibly left.
//!
//! # Heuristic
//!
//! For each occupied target square `t` (ascending square order) holding `p`:
//!
//! 1. `previous[t] == p` - nothing arrived, no entry.
//! 2. Candidates are squares `s` with `previous[s] == p` that no longer hold
//!    `p` in the current position. Squares still holding the same piece are
//!    left alone so an unmoved twin is never claimed as an origin.
//! 3. The nearest candidate by squared file/rank distance wins. Ties go to the
//!    first candidate in ascending square order.
//! 4. The chosen origin leaves the pool, so two targets never share one.
//! 5. No candidate (a freshly added piece) - no origin.
//!
//! If `previous[t]` held a different piece, that piece was captured and is
//! reported as the phantom for `t`.
//!
//! Nothing here validates chess legality; the result is a best guess for
//! animation only.

use crate::game::components::Position;
use crate::rendering::{Piece, Square};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// What happened on one target square between two positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareChange {
    /// Inferred square the new occupant moved from
    pub origin: Option<Square>,
    /// Different piece that stood here before and was overwritten
    pub captured: Option<Piece>,
}

/// Per target square changes, keyed by the square in the current position
pub type PositionDiff = BTreeMap<Square, SquareChange>;

/// Target square → inferred origin square
///
/// Squares whose occupant has no plausible origin are absent. Identical
/// positions produce an empty map.
pub fn diff(current: &Position, previous: &Position) -> BTreeMap<Square, Square> {
    diff_with_captures(current, previous)
        .into_iter()
        .filter_map(|(target, change)| change.origin.map(|origin| (target, origin)))
        .collect()
}

/// Full diff including captured phantoms
///
/// An entry is present when the target has an inferred origin, a captured
/// piece, or both.
pub fn diff_with_captures(current: &Position, previous: &Position) -> PositionDiff {
    let mut claimed: BTreeSet<Square> = BTreeSet::new();
    let mut changes = PositionDiff::new();

    for (target, piece) in current.iter() {
        let before = previous.get(target);
        if before == Some(piece) {
            continue;
        }

        let origin = previous
            .squares_of(piece)
            .filter(|&candidate| current.get(candidate) != Some(piece))
            .filter(|candidate| !claimed.contains(candidate))
            .min_by_key(|&candidate| candidate.distance_squared(target));

        if let Some(origin) = origin {
            claimed.insert(origin);
        }

        let captured = before.filter(|&previous_piece| previous_piece != piece);

        if origin.is_some() || captured.is_some() {
            changes.insert(target, SquareChange { origin, captured });
        }
    }

    debug!(
        "[DIFF] {} changed squares ({} with origin, {} captures)",
        changes.len(),
        claimed.len(),
        changes.values().filter(|change| change.captured.is_some()).count()
    );

    changes
}

//! Board transition tracking
//!
//! [`BoardTransitions`] is the per-board state that turns a stream of rendered
//! positions into screen-space animation records. One instance belongs to one
//! board; nothing is shared between boards.
//!
//! # Per render
//!
//! 1. Same position as the last *different* one: hand back the cached records.
//!    Re-renders without a real change must not restart animations.
//! 2. Suppressed change (see [`TransitionSuppression`]): records become empty.
//! 3. Animations switched off in [`TransitionSettings`]: records become empty.
//! 4. Otherwise diff against the last different position and map every origin
//!    through the caller's [`SquareGeometry`].
//!
//! The records for a change stay cached until the next different position
//! arrives.
//!
//! # Example
//!
//! ```
//! use chessboard_transitions::game::components::Position;
//! use chessboard_transitions::game::resources::BoardTransitions;
//! use chessboard_transitions::rendering::{BoardGeometry, BoardOrientation};
//!
//! let geometry = BoardGeometry::new(800, BoardOrientation::White);
//! let mut transitions = BoardTransitions::new(Position::start());
//!
//! let after = Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR").unwrap();
//! let records = transitions.update(&after, &geometry);
//!
//! let e4 = "e4".parse().unwrap();
//! assert_eq!(records.get(e4).unwrap().origin_square.to_string(), "e2");
//! ```

use crate::core::TransitionSettings;
use crate::game::components::Position;
use crate::game::resources::suppression::TransitionSuppression;
use crate::game::systems::diff::diff_with_captures;
use crate::rendering::{Piece, PixelOffset, Square, SquareGeometry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// How the piece now standing on a square should animate in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SquareTransitionRecord {
    /// Square the piece is inferred to have left
    pub origin_square: Square,
    /// Screen position of `origin_square` when the change was diffed
    pub origin_pixel_offset: PixelOffset,
    /// Piece that stood on the target and should fade out in place
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_piece: Option<Piece>,
}

impl SquareTransitionRecord {
    /// Translation that places the piece back on its origin
    ///
    /// Start the slide animation at this offset relative to the target square
    /// and run it to zero.
    pub fn slide_from(&self, target_pixel: PixelOffset) -> PixelOffset {
        self.origin_pixel_offset - target_pixel
    }
}

/// Target square → transition record for the latest position change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionRecords {
    records: BTreeMap<Square, SquareTransitionRecord>,
}

impl TransitionRecords {
    pub fn get(&self, target: Square) -> Option<&SquareTransitionRecord> {
        self.records.get(&target)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, &SquareTransitionRecord)> + '_ {
        self.records.iter().map(|(&square, record)| (square, record))
    }

    /// Phantom pieces to fade out, with the square they stood on
    pub fn captured_pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter()
            .filter_map(|(square, record)| record.captured_piece.map(|piece| (square, piece)))
    }
}

/// Per-board transition state carried across renders
#[derive(Debug, Clone, Default)]
pub struct BoardTransitions {
    last_position: Position,
    records: TransitionRecords,
    suppression: TransitionSuppression,
    settings: TransitionSettings,
}

impl BoardTransitions {
    /// Start tracking with `initial` treated as already rendered
    pub fn new(initial: Position) -> Self {
        Self::with_settings(initial, TransitionSettings::default())
    }

    pub fn with_settings(initial: Position, settings: TransitionSettings) -> Self {
        Self {
            last_position: initial,
            records: TransitionRecords::default(),
            suppression: TransitionSuppression::default(),
            settings,
        }
    }

    /// Feed the position being rendered now
    ///
    /// `geometry` supplies the on-screen position of origin squares; it is only
    /// consulted when a new diff actually runs.
    pub fn update<G>(&mut self, position: &Position, geometry: &G) -> &TransitionRecords
    where
        G: SquareGeometry + ?Sized,
    {
        if position.structurally_eq(&self.last_position) {
            return &self.records;
        }

        let suppressed = self.suppression.observe(&self.last_position, position);

        self.records = if suppressed {
            debug!("[TRANSITION] Change suppressed, no transitions");
            TransitionRecords::default()
        } else if !self.settings.show_animations {
            TransitionRecords::default()
        } else {
            Self::build_records(position, &self.last_position, geometry)
        };

        self.last_position = position.clone();
        &self.records
    }

    /// [`update`](Self::update) using the board width and orientation from
    /// the current settings
    pub fn update_with_board_geometry(&mut self, position: &Position) -> &TransitionRecords {
        let geometry = self.settings.geometry();
        self.update(position, &geometry)
    }

    fn build_records<G>(current: &Position, previous: &Position, geometry: &G) -> TransitionRecords
    where
        G: SquareGeometry + ?Sized,
    {
        let records = diff_with_captures(current, previous)
            .into_iter()
            .filter_map(|(target, change)| {
                change.origin.map(|origin| {
                    (
                        target,
                        SquareTransitionRecord {
                            origin_square: origin,
                            origin_pixel_offset: geometry.square_to_pixel(origin),
                            captured_piece: change.captured,
                        },
                    )
                })
            })
            .collect();

        let records = TransitionRecords { records };
        debug!("[TRANSITION] {} squares animating", records.len());
        records
    }

    /// Suppress inference for the next position change
    ///
    /// Call before committing a position whose move the UI already animated
    /// (drag and drop), or before re-rendering after a rejected drop.
    pub fn disable_transition_in_next_position(&mut self) {
        self.suppression.disable(self.last_position.clone());
    }

    /// Cancel a pending [`disable_transition_in_next_position`](Self::disable_transition_in_next_position)
    pub fn enable_transition_in_next_position(&mut self) {
        self.suppression.enable();
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppression.is_suppressed()
    }

    /// Records for the latest position change
    pub fn records(&self) -> &TransitionRecords {
        &self.records
    }

    /// Last position that differed from its predecessor
    pub fn last_position(&self) -> &Position {
        &self.last_position
    }

    pub fn settings(&self) -> &TransitionSettings {
        &self.settings
    }

    /// Replace settings; cached records are kept until the next change
    pub fn set_settings(&mut self, settings: TransitionSettings) {
        if settings != self.settings {
            info!(
                "[TRANSITION] Settings updated: width {}px, {:?} orientation, animations {}",
                settings.board_width,
                settings.orientation,
                if settings.show_animations { "on" } else { "off" }
            );
        }
        self.settings = settings;
    }
}

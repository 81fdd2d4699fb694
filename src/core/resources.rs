//! Transition settings
//!
//! User-facing knobs for how a board animates position changes. Stored as JSON
//! by [`crate::core::settings_persistence`]; missing fields take their defaults
//! so older settings files keep loading.

use crate::core::error::{SettingsError, SettingsResult};
use crate::rendering::{BoardGeometry, BoardOrientation};
use serde::{Deserialize, Serialize};

/// Board animation preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionSettings {
    /// Rendered board width in pixels
    pub board_width: u32,

    /// Which colour is drawn at the bottom
    pub orientation: BoardOrientation,

    /// Whether position changes animate at all
    pub show_animations: bool,

    /// Slide/fade duration handed to the presentation layer
    pub animation_duration_ms: u64,
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            board_width: 560,
            orientation: BoardOrientation::White,
            show_animations: true,
            animation_duration_ms: 300,
        }
    }
}

impl TransitionSettings {
    /// Reject widths that cannot fit a single pixel per square
    pub fn validate(&self) -> SettingsResult<()> {
        if self.board_width < 8 {
            return Err(SettingsError::InvalidBoardWidth {
                width: self.board_width,
            });
        }
        Ok(())
    }

    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::new(self.board_width, self.orientation)
    }
}

pub mod core;
pub mod game;
pub mod rendering;

pub use crate::core::TransitionSettings;
pub use game::components::Position;
pub use game::resources::{BoardTransitions, SquareTransitionRecord, TransitionRecords};
pub use game::systems::diff;
pub use rendering::{BoardGeometry, BoardOrientation, Piece, PixelOffset, Square, SquareGeometry};

//! Board coordinate geometry
//!
//! Converts between [`Square`]s and pixel offsets inside a square board of a
//! given pixel width. The origin is the top-left corner of the board, `x` grows
//! to the right and `y` grows downwards.
//!
//! With [`BoardOrientation::White`] rank 8 is drawn at the top (`y = 0`) and the
//! a-file on the left. [`BoardOrientation::Black`] mirrors both axes: rank 1 at
//! the top and the h-file on the left.
//!
//! Widths that are not a multiple of 8 are floored to a whole square width, so
//! squares stay pixel aligned and the leftover pixels fall off the right and
//! bottom edges.

use crate::rendering::utils::Square;
use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// Which colour is drawn at the bottom of the board
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BoardOrientation {
    #[default]
    White,
    Black,
}

/// Pixel offset of a square's top-left corner, relative to the board's top-left
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelOffset {
    pub x: f32,
    pub y: f32,
}

impl PixelOffset {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Sub for PixelOffset {
    type Output = PixelOffset;

    fn sub(self, rhs: PixelOffset) -> PixelOffset {
        PixelOffset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width of one square, floored to whole pixels
pub fn square_width(board_width: u32) -> f32 {
    (board_width / 8) as f32
}

/// Top-left pixel offset of `square`
pub fn square_to_pixel(square: Square, board_width: u32, orientation: BoardOrientation) -> PixelOffset {
    let width = square_width(board_width);
    let (file, rank) = square.indices();

    let (column, row) = match orientation {
        BoardOrientation::White => (file, 7 - rank),
        BoardOrientation::Black => (7 - file, rank),
    };

    PixelOffset::new(column as f32 * width, row as f32 * width)
}

/// Square under `point`
///
/// Points outside the board clamp to the nearest edge square. NaN coordinates
/// and boards narrower than 8 pixels resolve to index 0 on the affected axis.
pub fn pixel_to_square(point: PixelOffset, board_width: u32, orientation: BoardOrientation) -> Square {
    let width = square_width(board_width);
    let column = axis_index(point.x, width);
    let row = axis_index(point.y, width);

    let (file, rank) = match orientation {
        BoardOrientation::White => (column, 7 - row),
        BoardOrientation::Black => (7 - column, row),
    };

    Square::from_indices_unchecked(file, rank)
}

fn axis_index(coordinate: f32, square_width: f32) -> u8 {
    if square_width <= 0.0 || coordinate.is_nan() {
        return 0;
    }
    (coordinate / square_width).floor().clamp(0.0, 7.0) as u8
}

/// Source of on-screen square positions for transition records
///
/// [`BoardGeometry`] gives the theoretical layout. Callers that measure the
/// actual rendered squares can pass any `Fn(Square) -> PixelOffset` instead.
pub trait SquareGeometry {
    fn square_to_pixel(&self, square: Square) -> PixelOffset;
}

impl<F> SquareGeometry for F
where
    F: Fn(Square) -> PixelOffset,
{
    fn square_to_pixel(&self, square: Square) -> PixelOffset {
        self(square)
    }
}

/// Board width and orientation bundled for repeated conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardGeometry {
    pub board_width: u32,
    pub orientation: BoardOrientation,
}

impl BoardGeometry {
    pub const fn new(board_width: u32, orientation: BoardOrientation) -> Self {
        Self {
            board_width,
            orientation,
        }
    }

    pub fn square_width(&self) -> f32 {
        square_width(self.board_width)
    }

    pub fn pixel_to_square(&self, point: PixelOffset) -> Square {
        pixel_to_square(point, self.board_width, self.orientation)
    }
}

impl SquareGeometry for BoardGeometry {
    fn square_to_pixel(&self, square: Square) -> PixelOffset {
        square_to_pixel(square, self.board_width, self.orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_white_orientation_corners() {
        //! Rank 8 sits at the top and the a-file on the left for white
        assert_eq!(square_to_pixel(sq("a8"), 800, BoardOrientation::White), PixelOffset::new(0.0, 0.0));
        assert_eq!(square_to_pixel(sq("h1"), 800, BoardOrientation::White), PixelOffset::new(700.0, 700.0));
        assert_eq!(square_to_pixel(sq("a1"), 800, BoardOrientation::White), PixelOffset::new(0.0, 700.0));
        assert_eq!(square_to_pixel(sq("e4"), 800, BoardOrientation::White), PixelOffset::new(400.0, 400.0));
    }

    #[test]
    fn test_black_orientation_mirrors_both_axes() {
        //! Flipping the board mirrors files and ranks, not just one axis
        for square in Square::all() {
            let white = square_to_pixel(square, 640, BoardOrientation::White);
            let black = square_to_pixel(square, 640, BoardOrientation::Black);
            assert_eq!(black.x, 560.0 - white.x, "x mirror for {square}");
            assert_eq!(black.y, 560.0 - white.y, "y mirror for {square}");
        }
        assert_eq!(square_to_pixel(sq("h1"), 800, BoardOrientation::Black), PixelOffset::new(0.0, 0.0));
    }

    #[test]
    fn test_non_divisible_width_is_floored() {
        assert_eq!(square_width(805), 100.0);
        assert_eq!(square_to_pixel(sq("b7"), 805, BoardOrientation::White), PixelOffset::new(100.0, 100.0));
    }

    #[test]
    fn test_pixel_to_square_inside_square() {
        let point = PixelOffset::new(437.5, 462.0);
        assert_eq!(pixel_to_square(point, 800, BoardOrientation::White), sq("e4"));
        assert_eq!(pixel_to_square(point, 800, BoardOrientation::Black), sq("d5"));
    }

    #[test]
    fn test_pixel_to_square_clamps_out_of_board() {
        //! Clicks outside the board resolve to an edge square instead of failing
        let geometry = BoardGeometry::new(800, BoardOrientation::White);
        assert_eq!(geometry.pixel_to_square(PixelOffset::new(-50.0, -50.0)), sq("a8"));
        assert_eq!(geometry.pixel_to_square(PixelOffset::new(5000.0, 5000.0)), sq("h1"));
        assert_eq!(geometry.pixel_to_square(PixelOffset::new(f32::NAN, 799.0)), sq("a1"));
    }

    #[test]
    fn test_zero_width_board_does_not_panic() {
        let square = pixel_to_square(PixelOffset::new(10.0, 10.0), 0, BoardOrientation::White);
        assert_eq!(square, sq("a8"));
    }

    #[test]
    fn test_closure_geometry() {
        let measured = |square: Square| PixelOffset::new(square.file() as f32, 1.0);
        assert_eq!(measured.square_to_pixel(sq("c3")), PixelOffset::new(2.0, 1.0));
    }
}

//! Board occupancy snapshot
//!
//! A [`Position`] maps occupied squares to the piece standing on them. Empty
//! squares have no entry. Two positions are equal when they hold exactly the
//! same square → piece pairs, no matter how or in which order they were built.

use crate::game::error::PositionResult;
use crate::rendering::{Piece, PieceColor, PieceType, Square};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete occupancy snapshot of the board at one instant
///
/// Backed by a `BTreeMap`, so iteration runs in ascending [`Square`] order
/// (a1, b1, ..., h8) and equality is structural.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position {
    squares: BTreeMap<Square, Piece>,
}

impl Position {
    /// Board with no pieces
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard chess starting position
    pub fn start() -> Self {
        const BACK_ROW: [PieceType; 8] = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];

        let mut position = Self::empty();
        for (file, &piece_type) in BACK_ROW.iter().enumerate() {
            let file = file as u8;
            position.insert(
                Square::from_indices_unchecked(file, 0),
                Piece::new(PieceColor::White, piece_type),
            );
            position.insert(
                Square::from_indices_unchecked(file, 1),
                Piece::new(PieceColor::White, PieceType::Pawn),
            );
            position.insert(
                Square::from_indices_unchecked(file, 6),
                Piece::new(PieceColor::Black, PieceType::Pawn),
            );
            position.insert(
                Square::from_indices_unchecked(file, 7),
                Piece::new(PieceColor::Black, piece_type),
            );
        }
        position
    }

    /// Build a position from `(square, piece code)` string pairs
    ///
    /// ```
    /// use chessboard_transitions::game::components::Position;
    ///
    /// let position = Position::from_pairs([("e4", "wP"), ("e5", "bP")]).unwrap();
    /// assert_eq!(position.len(), 2);
    /// ```
    ///
    /// Later pairs overwrite earlier ones on the same square.
    pub fn from_pairs<'a, I>(pairs: I) -> PositionResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut position = Self::empty();
        for (square, piece) in pairs {
            position.insert(square.parse::<Square>()?, piece.parse::<Piece>()?);
        }
        Ok(position)
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares.get(&square).copied()
    }

    /// Place `piece` on `square`, returning whatever stood there before
    pub fn insert(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares.insert(square, piece)
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares.remove(&square)
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Occupied squares with their pieces, in ascending square order
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().map(|(&square, &piece)| (square, piece))
    }

    /// Squares holding exactly `piece`, in ascending square order
    pub fn squares_of(&self, piece: Piece) -> impl Iterator<Item = Square> + '_ {
        self.iter()
            .filter(move |&(_, occupant)| occupant == piece)
            .map(|(square, _)| square)
    }

    /// Same set of square → piece pairs
    ///
    /// Equivalent to `==`; spelled out because callers hold positions that
    /// arrive as fresh values on every render and must never be compared by
    /// identity.
    pub fn structurally_eq(&self, other: &Position) -> bool {
        self.squares == other.squares
    }
}

impl FromIterator<(Square, Piece)> for Position {
    fn from_iter<T: IntoIterator<Item = (Square, Piece)>>(iter: T) -> Self {
        Self {
            squares: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Square, Piece)> for Position {
    fn extend<T: IntoIterator<Item = (Square, Piece)>>(&mut self, iter: T) {
        self.squares.extend(iter);
    }
}

//! Piece identifiers
//!
//! A [`Piece`] is the opaque value stored on an occupied square: a colour and a
//! piece type, 12 combinations in total. Pieces compare by value only.
//!
//! # Textual forms
//!
//! - Piece code: colour prefix plus upper-case letter, e.g. `wK`, `bN`, `wP`.
//!   This is the form used in JSON positions.
//! - FEN character: upper-case for white, lower-case for black, e.g. `K`, `n`.

use crate::rendering::error::{BoardError, BoardResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    fn prefix(self) -> char {
        match self {
            PieceColor::White => 'w',
            PieceColor::Black => 'b',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum PieceType {
    #[default]
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    /// Upper-case letter used in FEN and piece codes
    pub fn letter(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Queen => 'Q',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Rook => 'R',
            PieceType::Pawn => 'P',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'K' => Some(PieceType::King),
            'Q' => Some(PieceType::Queen),
            'B' => Some(PieceType::Bishop),
            'N' => Some(PieceType::Knight),
            'R' => Some(PieceType::Rook),
            'P' => Some(PieceType::Pawn),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Piece {
    pub color: PieceColor,
    pub piece_type: PieceType,
}

impl Piece {
    pub const fn new(color: PieceColor, piece_type: PieceType) -> Self {
        Self { color, piece_type }
    }

    /// Decode a FEN piece character (`K`, `q`, ...)
    pub fn from_fen_char(c: char) -> Option<Self> {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let color = if c.is_ascii_uppercase() {
            PieceColor::White
        } else {
            PieceColor::Black
        };
        PieceType::from_letter(c).map(|piece_type| Piece::new(color, piece_type))
    }

    pub fn to_fen_char(self) -> char {
        let letter = self.piece_type.letter();
        match self.color {
            PieceColor::White => letter,
            PieceColor::Black => letter.to_ascii_lowercase(),
        }
    }
}

impl FromStr for Piece {
    type Err = BoardError;

    fn from_str(s: &str) -> BoardResult<Self> {
        let invalid = || BoardError::InvalidPiece { code: s.to_string() };

        let mut chars = s.chars();
        let (Some(prefix), Some(letter), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let color = match prefix {
            'w' => PieceColor::White,
            'b' => PieceColor::Black,
            _ => return Err(invalid()),
        };
        if !letter.is_ascii_uppercase() {
            return Err(invalid());
        }

        PieceType::from_letter(letter)
            .map(|piece_type| Piece::new(color, piece_type))
            .ok_or_else(invalid)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.prefix(), self.piece_type.letter())
    }
}

impl Serialize for Piece {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Piece {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

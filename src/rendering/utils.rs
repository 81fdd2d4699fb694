//! Board square addressing
//!
//! [`Square`] identifies one of the 64 board cells by 0-based file and rank
//! indices and converts to and from algebraic notation (`"a1"`..`"h8"`).
//!
//! # Ordering
//!
//! Squares order rank-major starting at a1: `a1 < b1 < ... < h1 < a2 < ... < h8`.
//! Positions are keyed by `Square` in a `BTreeMap`, so this is also the order in
//! which the diff algorithm visits target squares and breaks distance ties.
//!
//! # Serialization
//!
//! Squares serialize as their algebraic name, which lets a
//! [`Position`](crate::game::components::Position) round-trip as a plain JSON
//! object such as `{"e4": "wP"}`.

use crate::rendering::error::{BoardError, BoardResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One board cell, addressed by file (`a`=0..`h`=7) and rank (`1`=0..`8`=7)
///
/// Field order matters: the derived `Ord` compares rank first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Build a square from 0-based indices
    pub fn new(file: u8, rank: u8) -> BoardResult<Self> {
        if file > 7 || rank > 7 {
            return Err(BoardError::SquareIndexOutOfRange { file, rank });
        }
        Ok(Self { rank, file })
    }

    /// Build a square from indices already known to be in range
    pub(crate) const fn from_indices_unchecked(file: u8, rank: u8) -> Self {
        Self { rank, file }
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    /// `(file, rank)` pair, both 0-7
    pub fn indices(self) -> (u8, u8) {
        (self.file, self.rank)
    }

    /// Squared Euclidean distance in file/rank index space
    ///
    /// Used by the diff heuristic to pick the nearest plausible origin square.
    pub fn distance_squared(self, other: Square) -> u32 {
        let df = self.file as i32 - other.file as i32;
        let dr = self.rank as i32 - other.rank as i32;
        (df * df + dr * dr) as u32
    }

    /// All 64 squares in ascending order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square::from_indices_unchecked(file, rank)))
    }
}

/// Parse an algebraic square name into `(file, rank)` indices
///
/// Fails with [`BoardError::InvalidSquare`] unless the input is exactly two
/// characters, a file letter `a`-`h` followed by a rank digit `1`-`8`.
pub fn square_to_indices(square: &str) -> BoardResult<(u8, u8)> {
    square.parse::<Square>().map(Square::indices)
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BoardError::InvalidSquare {
            square: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }

        Ok(Square::from_indices_unchecked(file - b'a', rank - b'1'))
    }
}

impl TryFrom<&str> for Square {
    type Error = BoardError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.file), char::from(b'1' + self.rank))
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

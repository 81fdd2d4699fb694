//! FEN piece placement conversion
//!
//! Only the first FEN field (piece placement) matters for rendering. Full FEN
//! strings are accepted and everything after the first space is ignored; side
//! to move, castling rights and clocks are game state, not occupancy.
//!
//! Ranks are listed from 8 down to 1, files from a to h, digits 1-8 encode
//! runs of empty squares. Every rank must add up to exactly eight squares.

use crate::game::components::Position;
use crate::game::error::{PositionError, PositionResult};
use crate::rendering::{Piece, Square};
use std::str::FromStr;

/// Piece placement of the standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Position {
    /// Parse the piece placement field of a FEN string
    pub fn from_fen(fen: &str) -> PositionResult<Self> {
        let invalid = |reason: String| PositionError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };

        let placement = fen.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid(format!("expected 8 ranks, found {}", ranks.len())));
        }

        let mut position = Position::empty();
        for (row, rank_text) in ranks.iter().enumerate() {
            let rank = 7 - row as u8;
            let mut file: u8 = 0;

            for c in rank_text.chars() {
                if let Some(run) = c.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(invalid(format!("bad empty-square count '{c}' on rank {}", rank + 1)));
                    }
                    file += run as u8;
                } else {
                    let piece = Piece::from_fen_char(c)
                        .ok_or_else(|| invalid(format!("unknown piece '{c}' on rank {}", rank + 1)))?;
                    if file > 7 {
                        return Err(invalid(format!("rank {} has more than 8 squares", rank + 1)));
                    }
                    position.insert(Square::from_indices_unchecked(file, rank), piece);
                    file += 1;
                }

                if file > 8 {
                    return Err(invalid(format!("rank {} has more than 8 squares", rank + 1)));
                }
            }

            if file != 8 {
                return Err(invalid(format!("rank {} has {file} squares, expected 8", rank + 1)));
            }
        }

        Ok(position)
    }

    /// Piece placement FEN for this position
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(64);

        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                match self.get(Square::from_indices_unchecked(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push(char::from(b'0' + empty));
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

//! Coordinate mapping
//!
//! Converts between authoritative `(row, col)` addressing, file/rank
//! notation (`e4`), and the visual grid the viewer sees. When the human
//! plays Black against an automated White the whole board is turned 180
//! degrees, so both axes flip together.

use crate::game::error::{NotationError, NotationResult};
use crate::game::session::Seats;
use crate::game::types::{PieceColor, Position};

/// `(6, 4)` -> `"e2"`
pub fn to_notation(pos: Position) -> String {
    let file = (b'a' + pos.col) as char;
    let rank = 8 - pos.row;
    format!("{}{}", file, rank)
}

/// `"e2"` -> `(6, 4)`
pub fn from_notation(input: &str) -> NotationResult<Position> {
    let bytes = input.as_bytes();
    if bytes.len() != 2 {
        return Err(NotationError::Length {
            input: input.to_string(),
        });
    }

    let file = bytes[0].to_ascii_lowercase();
    if !(b'a'..=b'h').contains(&file) {
        return Err(NotationError::File {
            input: input.to_string(),
        });
    }

    let rank = bytes[1];
    if !(b'1'..=b'8').contains(&rank) {
        return Err(NotationError::Rank {
            input: input.to_string(),
        });
    }

    Ok(Position {
        row: 8 - (rank - b'0'),
        col: file - b'a',
    })
}

/// Visual position of an authoritative square
pub fn to_visual(pos: Position, human_is_black: bool) -> Position {
    if human_is_black { pos.rotated() } else { pos }
}

/// Authoritative position of a visual square
///
/// A half turn is its own inverse.
pub fn from_visual(visual: Position, human_is_black: bool) -> Position {
    to_visual(visual, human_is_black)
}

/// How the board is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// White at the bottom
    #[default]
    Standard,
    /// Turned 180 degrees, Black at the bottom
    Rotated,
}

impl Orientation {
    /// Rotated only when Black is human and White is not
    pub fn for_seats(seats: &Seats) -> Self {
        if seats.human_color() == Some(PieceColor::Black) {
            Orientation::Rotated
        } else {
            Orientation::Standard
        }
    }

    pub fn is_rotated(self) -> bool {
        self == Orientation::Rotated
    }

    pub fn to_visual(self, pos: Position) -> Position {
        to_visual(pos, self.is_rotated())
    }

    pub fn from_visual(self, visual: Position) -> Position {
        from_visual(visual, self.is_rotated())
    }
}

//! Move history tracking
//!
//! Chronological record of confirmed moves for the move-list display. Only
//! used when the authority's snapshot does not carry its own history.

use crate::game::types::{MoveRecord, PieceColor};
use crate::rendering::board::coordinates::to_notation;

/// Moves confirmed since the board was initialised
///
/// A resumed game may start recording with Black to move, so the side that
/// made the first recorded move is kept for numbering.
#[derive(Debug, Default, Clone)]
pub struct MoveHistory {
    pub moves: Vec<MoveRecord>,
    pub first_mover: PieceColor,
}

impl MoveHistory {
    /// Empty history whose first recorded move will be `first_mover`'s
    pub fn starting_with(first_mover: PieceColor) -> Self {
        Self {
            moves: Vec::new(),
            first_mover,
        }
    }

    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    /// Get the most recent move, if any
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Render as numbered lines, `"1. e2e4 e7e5"`
    pub fn to_lines(&self) -> Vec<String> {
        format_move_list(&self.moves, self.first_mover)
    }
}

/// Number moves in pairs, the number advancing after Black's move
///
/// When Black made the first move the opening line is padded,
/// `"1. ... e7e5"`.
pub fn format_move_list(moves: &[MoveRecord], first_mover: PieceColor) -> Vec<String> {
    let mut slots: Vec<Option<&MoveRecord>> = Vec::with_capacity(moves.len() + 1);
    if first_mover == PieceColor::Black && !moves.is_empty() {
        slots.push(None);
    }
    slots.extend(moves.iter().map(Some));

    slots
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let mut line = format!("{}.", i + 1);
            for slot in pair {
                line.push(' ');
                match slot {
                    Some(record) => {
                        line.push_str(&to_notation(record.from));
                        line.push_str(&to_notation(record.to));
                    }
                    None => line.push_str("..."),
                }
            }
            line
        })
        .collect()
}

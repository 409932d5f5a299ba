//! Pending-move tracking
//!
//! Holds at most one move that the authority has confirmed but whose
//! animation has not finished. While it is occupied the renderer must not
//! draw the moving piece at its origin, and input is ignored.

use crate::game::types::{Piece, Position};
use std::cell::Cell;

/// A confirmed move awaiting the end of its animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    pub from: Position,
    pub to: Position,
    pub piece: Piece,
}

/// Single-slot mailbox for the in-flight move
///
/// Posting while occupied overwrites the older entry after logging a
/// warning; the older animation is considered abandoned.
#[derive(Debug, Default)]
pub struct PendingMoveSlot {
    slot: Cell<Option<PendingMove>>,
}

impl PendingMoveSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a confirmed move, returning any entry it displaced
    pub fn post(&self, mv: PendingMove) -> Option<PendingMove> {
        let previous = self.slot.replace(Some(mv));
        if let Some(old) = previous {
            tracing::warn!(
                "[PENDING] Overwriting in-flight move {} -> {} with {} -> {}",
                old.from,
                old.to,
                mv.from,
                mv.to
            );
        } else {
            tracing::debug!("[PENDING] Posted {:?} {} -> {}", mv.piece.kind, mv.from, mv.to);
        }
        previous
    }

    pub fn peek(&self) -> Option<PendingMove> {
        self.slot.get()
    }

    /// Clear the slot, returning what it held
    pub fn take(&self) -> Option<PendingMove> {
        let taken = self.slot.take();
        if let Some(mv) = taken {
            tracing::debug!("[PENDING] Cleared {} -> {}", mv.from, mv.to);
        }
        taken
    }

    pub fn is_occupied(&self) -> bool {
        self.slot.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{PieceColor, PieceKind};

    fn pawn_move(from_col: u8, to_row: u8) -> PendingMove {
        PendingMove {
            from: Position { row: 6, col: from_col },
            to: Position { row: to_row, col: from_col },
            piece: Piece::new(PieceKind::Pawn, PieceColor::White),
        }
    }

    #[test]
    fn test_slot_starts_empty() {
        let slot = PendingMoveSlot::new();
        assert!(!slot.is_occupied());
        assert_eq!(slot.peek(), None);
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_post_then_take() {
        let slot = PendingMoveSlot::new();
        let mv = pawn_move(4, 4);
        assert_eq!(slot.post(mv), None);
        assert!(slot.is_occupied());
        assert_eq!(slot.peek(), Some(mv));
        assert_eq!(slot.take(), Some(mv));
        assert!(!slot.is_occupied());
    }

    #[test]
    fn test_post_overwrites_previous() {
        //! The newer move wins and the displaced one is handed back
        let slot = PendingMoveSlot::new();
        let first = pawn_move(4, 4);
        let second = pawn_move(3, 5);
        slot.post(first);
        assert_eq!(slot.post(second), Some(first));
        assert_eq!(slot.peek(), Some(second));
    }
}

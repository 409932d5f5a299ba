//! Captured pieces tally
//!
//! Mirrors the per-colour capture lists an authority snapshot may carry and
//! derives the material-advantage indicator shown beside each side's name.
//!
//! # Material Values
//!
//! Standard chess piece values in pawns:
//! - Pawn: 1
//! - Knight/Bishop: 3
//! - Rook: 5
//! - Queen: 9
//! - King: 0 (cannot be captured)
//!
//! # Material Advantage
//!
//! Positive advantage means White is ahead, negative means Black is ahead.
//! Example: If White captured (Rook=5, Pawn=1) and Black captured (Knight=3),
//! White's advantage is (5+1) - 3 = +3 pawns.

use crate::game::types::{PieceColor, PieceKind};

/// Pieces captured by each side
///
/// # Fields
///
/// - `white_captured`: Black pieces that White has captured
/// - `black_captured`: White pieces that Black has captured
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct CapturedPieces {
    /// Pieces captured by white (black pieces taken)
    pub white_captured: Vec<PieceKind>,
    /// Pieces captured by black (white pieces taken)
    pub black_captured: Vec<PieceKind>,
}

impl CapturedPieces {
    /// Record a capture of a piece of `captured_piece_color`
    ///
    /// Credit goes to the opposite side.
    pub fn add_capture(&mut self, captured_piece_color: PieceColor, piece_type: PieceKind) {
        match captured_piece_color {
            PieceColor::White => self.black_captured.push(piece_type),
            PieceColor::Black => self.white_captured.push(piece_type),
        }
    }

    /// Material difference in pawn units, positive when White is ahead
    pub fn material_advantage(&self) -> i32 {
        let white_score: i32 = self.white_captured.iter().map(|p| p.value()).sum();
        let black_score: i32 = self.black_captured.iter().map(|p| p.value()).sum();
        white_score - black_score
    }

    /// Indicator text for `side`: `"+N"` if that side leads, empty otherwise
    pub fn advantage_label(&self, side: PieceColor) -> String {
        let advantage = match side {
            PieceColor::White => self.material_advantage(),
            PieceColor::Black => -self.material_advantage(),
        };
        if advantage > 0 {
            format!("+{}", advantage)
        } else {
            String::new()
        }
    }

    /// Pieces captured by `side`, as a compact row of piece codes
    ///
    /// Codes carry the colour of the captured piece, so White's row reads
    /// in lowercase.
    pub fn tally_for(&self, side: PieceColor) -> String {
        let (pieces, victim) = match side {
            PieceColor::White => (&self.white_captured, PieceColor::Black),
            PieceColor::Black => (&self.black_captured, PieceColor::White),
        };
        pieces
            .iter()
            .map(|&kind| crate::game::types::Piece::new(kind, victim).code())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_pieces_default() {
        //! Verifies that captured pieces starts empty
        let captured = CapturedPieces::default();
        assert!(captured.white_captured.is_empty());
        assert!(captured.black_captured.is_empty());
        assert_eq!(captured.material_advantage(), 0);
    }

    #[test]
    fn test_add_capture_credits_opposite_side() {
        let mut captured = CapturedPieces::default();
        captured.add_capture(PieceColor::Black, PieceKind::Queen);
        captured.add_capture(PieceColor::White, PieceKind::Rook);

        assert_eq!(captured.white_captured, vec![PieceKind::Queen]);
        assert_eq!(captured.black_captured, vec![PieceKind::Rook]);
    }

    #[test]
    fn test_material_advantage_white_ahead() {
        //! Tests material calculation when White is ahead
        let mut captured = CapturedPieces::default();
        captured.add_capture(PieceColor::Black, PieceKind::Queen);
        captured.add_capture(PieceColor::White, PieceKind::Pawn);

        assert_eq!(captured.material_advantage(), 8, "White should be +8 (9-1)");
        assert_eq!(captured.advantage_label(PieceColor::White), "+8");
        assert_eq!(captured.advantage_label(PieceColor::Black), "");
    }

    #[test]
    fn test_material_advantage_black_ahead() {
        //! Tests material calculation when Black is ahead
        let mut captured = CapturedPieces::default();
        captured.add_capture(PieceColor::White, PieceKind::Rook);
        captured.add_capture(PieceColor::Black, PieceKind::Bishop);

        assert_eq!(captured.material_advantage(), -2, "Black should be +2 (3-5 = -2)");
        assert_eq!(captured.advantage_label(PieceColor::Black), "+2");
        assert_eq!(captured.advantage_label(PieceColor::White), "");
    }

    #[test]
    fn test_material_advantage_equal() {
        //! A level exchange shows no indicator on either side
        let mut captured = CapturedPieces::default();
        captured.add_capture(PieceColor::Black, PieceKind::Knight);
        captured.add_capture(PieceColor::White, PieceKind::Bishop);

        assert_eq!(captured.material_advantage(), 0, "Material should be equal");
        assert_eq!(captured.advantage_label(PieceColor::White), "");
        assert_eq!(captured.advantage_label(PieceColor::Black), "");
    }

    #[test]
    fn test_complex_exchange() {
        //! Tests realistic game scenario with multiple captures
        let mut captured = CapturedPieces::default();

        // White captures: Queen(9), Rook(5), Pawn(1) = 15
        captured.add_capture(PieceColor::Black, PieceKind::Queen);
        captured.add_capture(PieceColor::Black, PieceKind::Rook);
        captured.add_capture(PieceColor::Black, PieceKind::Pawn);

        // Black captures: Rook(5), Knight(3), Bishop(3) = 11
        captured.add_capture(PieceColor::White, PieceKind::Rook);
        captured.add_capture(PieceColor::White, PieceKind::Knight);
        captured.add_capture(PieceColor::White, PieceKind::Bishop);

        assert_eq!(captured.material_advantage(), 4, "White should be +4 (15-11)");
        assert_eq!(captured.tally_for(PieceColor::White), "qrp");
        assert_eq!(captured.tally_for(PieceColor::Black), "RNB");
    }
}

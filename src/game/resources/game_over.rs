//! Game over detection from authority status strings
//!
//! The authority reports status as free text. A status is terminal when it
//! mentions checkmate, stalemate or a draw (case-insensitive); everything
//! else means play continues.

use crate::game::types::PieceColor;

/// Terminal outcome derived from a status string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// `winner` is `None` when the status did not name a side
    Checkmate { winner: Option<PieceColor> },
    Stalemate,
    Draw,
}

impl GameOutcome {
    /// Classify `status`, returning `None` for a game still in progress
    pub fn from_status(status: &str) -> Option<Self> {
        let lower = status.to_ascii_lowercase();
        if lower.contains("checkmate") {
            let winner = if lower.contains("white wins") || lower.contains("white won") {
                Some(PieceColor::White)
            } else if lower.contains("black wins") || lower.contains("black won") {
                Some(PieceColor::Black)
            } else {
                None
            };
            Some(GameOutcome::Checkmate { winner })
        } else if lower.contains("stalemate") {
            Some(GameOutcome::Stalemate)
        } else if lower.contains("draw") {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Checkmate with the winner inferred from whose turn it would be
    ///
    /// The side to move after checkmate is the side that was mated.
    pub fn with_turn(self, turn: PieceColor) -> Self {
        match self {
            GameOutcome::Checkmate { winner: None } => GameOutcome::Checkmate {
                winner: Some(turn.opposite()),
            },
            other => other,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            GameOutcome::Checkmate { .. } => "Checkmate!",
            GameOutcome::Stalemate => "Stalemate!",
            GameOutcome::Draw => "Game Drawn",
        }
    }

    /// Detail line; falls back to the raw status when no winner is known
    pub fn details(&self, status: &str) -> String {
        match self {
            GameOutcome::Checkmate {
                winner: Some(PieceColor::White),
            } => "White wins!".to_string(),
            GameOutcome::Checkmate {
                winner: Some(PieceColor::Black),
            } => "Black wins!".to_string(),
            GameOutcome::Stalemate | GameOutcome::Draw => "The game is a draw.".to_string(),
            GameOutcome::Checkmate { winner: None } => status.to_string(),
        }
    }
}

/// Whether `status` ends the game
pub fn is_terminal(status: &str) -> bool {
    GameOutcome::from_status(status).is_some()
}

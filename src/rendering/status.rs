//! Turn and status reflection
//!
//! Writes authoritative status and turn to the page's indicators. No
//! network access and no state of its own.

use crate::game::resources::GameOutcome;
use crate::game::types::PieceColor;
use crate::rendering::surface::{Surface, TextSink};

/// Status the authority reports while a game is in progress
pub const ACTIVE_SENTINEL: &str = "active";

/// What the viewer reads for the in-progress sentinel
pub const ACTIVE_DISPLAY: &str = "Game ongoing";

/// Status text as shown to the viewer
pub fn display_status(status: &str) -> &str {
    if status == ACTIVE_SENTINEL {
        ACTIVE_DISPLAY
    } else {
        status
    }
}

/// Show `status` and mark the seat whose turn it is
pub fn reflect<S: Surface + ?Sized>(surface: &mut S, status: &str, turn: PieceColor) {
    if !surface.set_text(TextSink::Status, display_status(status)) {
        tracing::debug!("[RENDER] Status sink missing, skipping status update");
    }
    if !surface.set_seat_active(turn) {
        tracing::debug!("[RENDER] Seat indicators missing, skipping turn marker");
    }
}

/// Show a bare message in the status line, turn marker untouched
pub fn reflect_message<S: Surface + ?Sized>(surface: &mut S, message: &str) {
    if !surface.set_text(TextSink::Status, message) {
        tracing::debug!("[RENDER] Status sink missing, dropping message {:?}", message);
    }
}

/// Fill the game-over title and details when `status` is terminal
///
/// Returns the outcome so callers can stop automated play.
pub fn reflect_game_over<S: Surface + ?Sized>(
    surface: &mut S,
    status: &str,
    turn: PieceColor,
) -> Option<GameOutcome> {
    let outcome = GameOutcome::from_status(status)?.with_turn(turn);
    surface.set_text(TextSink::GameOverTitle, outcome.title());
    surface.set_text(TextSink::GameOverDetails, &outcome.details(status));
    tracing::info!("[RENDER] Game over: {} ({})", outcome.title(), status);
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::headless::HeadlessSurface;

    #[test]
    fn test_active_sentinel_is_translated() {
        let mut surface = HeadlessSurface::default();
        reflect(&mut surface, "active", PieceColor::Black);
        assert_eq!(surface.text(TextSink::Status), Some("Game ongoing"));
        assert_eq!(surface.active_seat(), Some(PieceColor::Black));
    }

    #[test]
    fn test_other_status_shown_verbatim() {
        let mut surface = HeadlessSurface::default();
        reflect(&mut surface, "White is in check", PieceColor::White);
        assert_eq!(surface.text(TextSink::Status), Some("White is in check"));
        assert_eq!(surface.active_seat(), Some(PieceColor::White));
    }

    #[test]
    fn test_game_over_only_for_terminal_status() {
        let mut surface = HeadlessSurface::default();
        assert!(reflect_game_over(&mut surface, "active", PieceColor::White).is_none());
        assert_eq!(surface.text(TextSink::GameOverTitle), None);

        // black to move and mated, so white wins
        let outcome = reflect_game_over(&mut surface, "checkmate", PieceColor::Black);
        assert!(outcome.is_some());
        assert_eq!(surface.text(TextSink::GameOverTitle), Some("Checkmate!"));
        assert_eq!(surface.text(TextSink::GameOverDetails), Some("White wins!"));
    }

    #[test]
    fn test_reflect_on_detached_surface_is_noop() {
        let mut surface = HeadlessSurface::default();
        surface.detach();
        reflect(&mut surface, "active", PieceColor::White);
        assert_eq!(surface.text(TextSink::Status), None);
    }
}

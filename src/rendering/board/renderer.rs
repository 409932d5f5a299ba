//! Board renderer
//!
//! Owns the mapping from an authoritative snapshot onto the 8x8 grid of
//! square elements. Squares are created lazily on first render and then
//! reused, so handlers bound to a square stay valid across renders.

use crate::game::resources::PendingMove;
use crate::game::resources::history::format_move_list;
use crate::game::types::{PieceColor, Position, Snapshot};
use crate::rendering::board::coordinates::Orientation;
use crate::rendering::status;
use crate::rendering::surface::{Highlight, SquareKey, Surface, TextSink};

/// Stateless apart from the board orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardRenderer {
    orientation: Orientation,
}

impl BoardRenderer {
    pub fn new(orientation: Orientation) -> Self {
        Self { orientation }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Square element showing an authoritative position
    pub fn key_for(&self, pos: Position) -> SquareKey {
        SquareKey(self.orientation.to_visual(pos))
    }

    /// Authoritative position shown by a square element
    pub fn position_for(&self, key: SquareKey) -> Position {
        self.orientation.from_visual(key.visual())
    }

    /// Build a fresh, empty grid of 64 squares
    ///
    /// Done once per game start; later updates go through [`Self::render`].
    pub fn construct<S: Surface + ?Sized>(&self, surface: &mut S) -> bool {
        surface.remove_all_squares();
        for visual in Position::all() {
            if !surface.create_square(SquareKey(visual), visual.is_light()) {
                tracing::warn!("[RENDER] Board container missing, construction aborted");
                return false;
            }
        }
        tracing::debug!("[RENDER] Constructed board ({:?})", self.orientation);
        true
    }

    /// Redraw every square from `snapshot`
    ///
    /// The piece a pending move carries is not drawn at its origin. Returns
    /// `false` if the board went away part way through.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        snapshot: &Snapshot,
        pending: Option<&PendingMove>,
    ) -> bool {
        for pos in Position::all() {
            let key = self.key_for(pos);
            if !surface.has_square(key) && !surface.create_square(key, key.visual().is_light()) {
                tracing::warn!("[RENDER] Square {:?} unavailable, render aborted", key);
                return false;
            }

            let piece = snapshot.piece_at(pos);
            let suppressed = pending.is_some_and(|mv| mv.from == pos && piece == Some(mv.piece));
            let drawn = if suppressed { None } else { piece };
            if !surface.set_piece(key, drawn) {
                tracing::warn!("[RENDER] Square {:?} vanished, render aborted", key);
                return false;
            }
        }

        status::reflect(surface, &snapshot.status, snapshot.turn);
        self.render_captured(surface, snapshot);
        if let Some(history) = &snapshot.history {
            surface.set_text(TextSink::MoveList, &format_move_list(history, PieceColor::White).join("\n"));
        }

        tracing::debug!(
            "[RENDER] Rendered {} pieces, {} to move",
            snapshot.piece_count(),
            snapshot.turn
        );
        true
    }

    fn render_captured<S: Surface + ?Sized>(&self, surface: &mut S, snapshot: &Snapshot) {
        let Some(captured) = &snapshot.captured else {
            return;
        };
        surface.set_text(TextSink::WhiteCaptured, &captured.tally_for(PieceColor::White));
        surface.set_text(TextSink::BlackCaptured, &captured.tally_for(PieceColor::Black));
        surface.set_text(
            TextSink::WhiteAdvantage,
            &captured.advantage_label(PieceColor::White),
        );
        surface.set_text(
            TextSink::BlackAdvantage,
            &captured.advantage_label(PieceColor::Black),
        );
    }

    /// Highlight a selected origin and its legal destinations
    pub fn highlight_selection<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        origin: Position,
        targets: &[Position],
    ) {
        surface.clear_highlights();
        surface.set_highlight(self.key_for(origin), Highlight::Selected);
        for &target in targets {
            surface.set_highlight(self.key_for(target), Highlight::LegalTarget);
        }
    }

    pub fn clear_highlights<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear_highlights();
    }
}

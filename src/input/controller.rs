//! Click input controller
//!
//! State machine over `Idle` / `PieceSelected`. Every click is gated on a
//! fresh snapshot: the game must be started, no move in flight, and the
//! authority must say it is a human seat's turn. A move is only ever
//! submitted to a destination the authority listed for the selected origin.

use crate::client::{BusyGuard, ChessClient};
use crate::game::resources::{Selection, is_terminal};
use crate::game::session::GameSession;
use crate::game::types::{MoveRecord, Position, Snapshot};
use crate::networking::authority::Authority;
use crate::rendering::animation::Clock;
use crate::rendering::surface::{SquareKey, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPhase {
    Idle,
    PieceSelected,
}

/// Why an input event did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NoSession,
    NotStarted,
    /// A move request or automated turn is in flight
    Busy,
    /// A confirmed move is still animating
    AnimationInFlight,
    NotYourTurn,
    GameOver,
    /// The square holds nothing the human can move
    NothingToSelect,
    /// The destination is not among the selected piece's legal moves
    NotALegalTarget,
    OutsideBoard,
    NoDragInProgress,
}

/// Result of one click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored(IgnoreReason),
    /// A piece is selected with this many legal destinations
    Selected { origin: Position, targets: usize },
    Deselected,
    /// The authority accepted the move and it has been animated
    MoveSubmitted { from: Position, to: Position },
    /// The authority refused the move; the reason is on the status line
    MoveRejected(String),
    /// The authority could not be reached
    Failed,
}

#[derive(Debug, Default, Clone)]
pub struct InputController {
    selection: Selection,
}

impl InputController {
    pub fn phase(&self) -> InputPhase {
        if self.selection.is_selected() {
            InputPhase::PieceSelected
        } else {
            InputPhase::Idle
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn select(&mut self, origin: Position, targets: Vec<Position>) {
        tracing::debug!("[INPUT] Selected {} with {} targets", origin, targets.len());
        self.selection.select(origin, targets);
    }

    pub fn clear(&mut self) {
        self.selection.clear();
    }
}

impl<A: Authority, S: Surface, C: Clock> ChessClient<A, S, C> {
    /// Handle a click on a square element
    pub async fn click_square(&self, key: SquareKey) -> ClickOutcome {
        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            tracing::debug!("[INPUT] Click on {:?} ignored, request in flight", key);
            return ClickOutcome::Ignored(IgnoreReason::Busy);
        };
        let (session, snapshot) = match self.input_gate().await {
            Ok(ready) => ready,
            Err(outcome) => return outcome,
        };

        let pos = self.renderer().position_for(key);
        let selection = self.input.borrow().selection().clone();

        if let Some(origin) = selection.origin {
            if selection.contains_target(pos) {
                return self
                    .submit_human_move(&session, &snapshot, origin, pos, &selection.legal_targets)
                    .await;
            }
        }

        match self.probe_origin(&session, &snapshot, pos).await {
            Ok(Some(targets)) => {
                let count = targets.len();
                self.select_origin(pos, targets);
                ClickOutcome::Selected {
                    origin: pos,
                    targets: count,
                }
            }
            Ok(None) if selection.is_selected() => {
                self.clear_selection();
                ClickOutcome::Deselected
            }
            Ok(None) => ClickOutcome::Ignored(IgnoreReason::NothingToSelect),
            Err(outcome) => outcome,
        }
    }

    /// Check that a human may act right now, using a freshly fetched snapshot
    pub(crate) async fn input_gate(&self) -> Result<(GameSession, Snapshot), ClickOutcome> {
        let Some(session) = self.session() else {
            return Err(ClickOutcome::Ignored(IgnoreReason::NoSession));
        };
        if !session.started {
            tracing::debug!("[INPUT] Game not started, input ignored");
            return Err(ClickOutcome::Ignored(IgnoreReason::NotStarted));
        }
        if self.pending.is_occupied() {
            tracing::debug!("[INPUT] Animation in flight, input ignored");
            return Err(ClickOutcome::Ignored(IgnoreReason::AnimationInFlight));
        }

        let Some(snapshot) = self.fetch_snapshot(&session.session_id).await else {
            self.clear_selection();
            return Err(ClickOutcome::Failed);
        };
        if is_terminal(&snapshot.status) {
            return Err(ClickOutcome::Ignored(IgnoreReason::GameOver));
        }
        if session.seats.is_automated(snapshot.turn) {
            tracing::debug!("[INPUT] {} to move is automated, input ignored", snapshot.turn);
            return Err(ClickOutcome::Ignored(IgnoreReason::NotYourTurn));
        }
        Ok((session, snapshot))
    }

    /// Legal destinations if `pos` holds a piece of the side to move
    pub(crate) async fn probe_origin(
        &self,
        session: &GameSession,
        snapshot: &Snapshot,
        pos: Position,
    ) -> Result<Option<Vec<Position>>, ClickOutcome> {
        let own_piece = snapshot
            .piece_at(pos)
            .is_some_and(|piece| piece.color == snapshot.turn);
        if !own_piece {
            return Ok(None);
        }

        match self.authority.get_legal_moves(&session.session_id, pos).await {
            Ok(targets) if targets.is_empty() => Ok(None),
            Ok(targets) => Ok(Some(targets)),
            Err(e) => {
                self.reflect_failure(&e);
                self.clear_selection();
                Err(ClickOutcome::Failed)
            }
        }
    }

    pub(crate) fn select_origin(&self, origin: Position, targets: Vec<Position>) {
        let renderer = self.renderer();
        renderer.highlight_selection(&mut *self.surface.borrow_mut(), origin, &targets);
        self.input.borrow_mut().select(origin, targets);
    }

    /// Submit `from -> to` if `to` is one of `legal_targets`
    ///
    /// On success the move is animated and, if the turn passes to an
    /// automated seat, automated play runs before this returns. The caller
    /// must hold the busy guard.
    pub(crate) async fn submit_human_move(
        &self,
        session: &GameSession,
        snapshot: &Snapshot,
        from: Position,
        to: Position,
        legal_targets: &[Position],
    ) -> ClickOutcome {
        if !legal_targets.contains(&to) {
            tracing::debug!("[INPUT] {} is not a legal target from {}", to, from);
            return ClickOutcome::Ignored(IgnoreReason::NotALegalTarget);
        }

        let outcome = match self.authority.submit_move(&session.session_id, from, to).await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.reflect_failure(&e);
                self.clear_selection();
                return ClickOutcome::Failed;
            }
        };

        self.clear_selection();
        if !outcome.success {
            let reason = self.reflect_rejection(outcome.error.as_deref());
            return ClickOutcome::MoveRejected(reason);
        }

        tracing::info!("[INPUT] Move {} -> {} accepted", from, to);
        let record = MoveRecord {
            from,
            to,
            piece: snapshot.piece_at(from),
        };
        let Some(after) = self.apply_confirmed_move(record).await else {
            return ClickOutcome::Failed;
        };

        if !is_terminal(&after.status) && session.seats.is_automated(after.turn) {
            self.automated_turns().await;
        }
        ClickOutcome::MoveSubmitted { from, to }
    }
}

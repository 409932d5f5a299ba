//! Automated-move trigger

use crate::client::{BusyGuard, ChessClient};
use crate::game::resources::GameOutcome;
use crate::game::session::GameSession;
use crate::game::types::{PieceColor, Snapshot};
use crate::networking::authority::Authority;
use crate::rendering::animation::Clock;
use crate::rendering::status;
use crate::rendering::surface::Surface;

/// Why automated play stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutomationStop {
    /// The side to move is human
    HumanTurn,
    GameOver(GameOutcome),
    Paused,
    NoSession,
    NotStarted,
    /// Something else holds the busy flag
    Busy,
    /// The authority declined to move, with its reason
    Rejected(String),
    /// Transport failure, already on the status line
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutomationReport {
    pub moves_applied: usize,
    pub stop: AutomationStop,
}

impl<A: Authority, S: Surface, C: Clock> ChessClient<A, S, C> {
    /// Let automated seats move until a human is on turn or play stops
    pub async fn run_automated_turns(&self) -> AutomationReport {
        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            tracing::debug!("[AUTOMOVE] Busy, not starting automated play");
            return AutomationReport {
                moves_applied: 0,
                stop: AutomationStop::Busy,
            };
        };
        self.automated_turns().await
    }

    /// Stop an exhibition after the move currently in flight
    pub fn pause_exhibition(&self) {
        tracing::info!("[AUTOMOVE] Exhibition paused");
        self.exhibition_paused.set(true);
    }

    /// Clear the pause flag and continue automated play
    pub async fn resume_exhibition(&self) -> AutomationReport {
        tracing::info!("[AUTOMOVE] Exhibition resumed");
        self.exhibition_paused.set(false);
        self.run_automated_turns().await
    }

    pub fn is_exhibition_paused(&self) -> bool {
        self.exhibition_paused.get()
    }

    /// Automated-play loop; the caller holds the busy guard
    pub(crate) async fn automated_turns(&self) -> AutomationReport {
        let mut moves_applied = 0;
        let stop = loop {
            if self.exhibition_paused.get() {
                break AutomationStop::Paused;
            }
            let Some(session) = self.session() else {
                break AutomationStop::NoSession;
            };
            if !session.started {
                break AutomationStop::NotStarted;
            }

            // skip the delay entirely when nothing is due to move
            if let Err(stop) = self.automated_seat_on_turn(&session).await {
                break stop;
            }

            let delay = if session.seats.is_exhibition() {
                self.settings.exhibition_delay()
            } else {
                self.settings.automove_delay()
            };
            self.clock.sleep(delay).await;
            if self.exhibition_paused.get() {
                break AutomationStop::Paused;
            }

            // the turn may have changed during the delay
            let (snapshot, color) = match self.automated_seat_on_turn(&session).await {
                Ok(on_turn) => on_turn,
                Err(stop) => break stop,
            };
            tracing::debug!(
                "[AUTOMOVE] Requesting move for {} ({})",
                color,
                session.seats.occupant(color).bot_id().unwrap_or("default")
            );
            let outcome = match self
                .authority
                .request_automated_move(&session.session_id, Some(color))
                .await
            {
                Ok(outcome) => outcome,
                Err(e) => {
                    self.reflect_failure(&e);
                    break AutomationStop::Failed;
                }
            };
            if !outcome.success {
                let reason = outcome.error.or(outcome.status);
                break AutomationStop::Rejected(self.reflect_rejection(reason.as_deref()));
            }

            match outcome.mv {
                Some(mut record) => {
                    if record.piece.is_none() {
                        record.piece = snapshot.piece_at(record.from);
                    }
                    tracing::info!("[AUTOMOVE] {} played {} -> {}", color, record.from, record.to);
                    if self.apply_confirmed_move(record).await.is_none() {
                        break AutomationStop::Failed;
                    }
                }
                None => {
                    tracing::warn!("[AUTOMOVE] Move accepted without details, re-rendering");
                    let Some(after) = self.fetch_snapshot(&session.session_id).await else {
                        break AutomationStop::Failed;
                    };
                    self.renderer()
                        .render(&mut *self.surface.borrow_mut(), &after, None);
                }
            }
            moves_applied += 1;
        };

        tracing::debug!("[AUTOMOVE] Stopped after {} moves: {:?}", moves_applied, stop);
        AutomationReport {
            moves_applied,
            stop,
        }
    }

    /// Fresh snapshot and the automated colour on turn, or why none is
    async fn automated_seat_on_turn(
        &self,
        session: &GameSession,
    ) -> Result<(Snapshot, PieceColor), AutomationStop> {
        let Some(snapshot) = self.fetch_snapshot(&session.session_id).await else {
            return Err(AutomationStop::Failed);
        };
        if let Some(outcome) =
            status::reflect_game_over(&mut *self.surface.borrow_mut(), &snapshot.status, snapshot.turn)
        {
            return Err(AutomationStop::GameOver(outcome));
        }
        let color = snapshot.turn;
        if !session.seats.is_automated(color) {
            return Err(AutomationStop::HumanTurn);
        }
        Ok((snapshot, color))
    }
}

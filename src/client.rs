//! The board client
//!
//! [`ChessClient`] owns every component (session context, pending slot,
//! selection, renderer, animator) and drives the confirmed-move cycle:
//! post the pending move, fetch a fresh snapshot, render with the move
//! suppressed at its origin, animate, render again.
//!
//! Everything runs on one thread. Components live in `RefCell`/`Cell` and
//! all methods take `&self`, so a host can poll several input futures at
//! once; no borrow is held across an `.await`. Input handling is in
//! [`crate::input`], automated play in [`crate::game::ai`].

use crate::core::error::{ClientError, ClientResult};
use crate::core::error_handling::{DEFAULT_REJECTION_STATUS, GENERIC_FAILURE_STATUS};
use crate::core::settings::ClientSettings;
use crate::game::resources::{MoveHistory, PendingMove, PendingMoveSlot, Selection};
use crate::game::session::{GameSession, NewGameConfig, Seats};
use crate::game::types::{MoveRecord, Snapshot};
use crate::input::controller::InputController;
use crate::input::drag::DragState;
use crate::networking::authority::Authority;
use crate::networking::error::AuthorityError;
use crate::rendering::animation::{AnimationResult, Clock, MoveAnimator, TokioClock};
use crate::rendering::board::BoardRenderer;
use crate::rendering::status;
use crate::rendering::surface::{Surface, TextSink};
use std::cell::{Cell, Ref, RefCell, RefMut};

/// Marks a move request as in flight for as long as it lives
pub(crate) struct BusyGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> BusyGuard<'a> {
    /// `None` if another request already holds the flag
    pub(crate) fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self { flag })
        }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

pub struct ChessClient<A, S, C = TokioClock>
where
    A: Authority,
    S: Surface,
    C: Clock,
{
    pub(crate) authority: A,
    pub(crate) surface: RefCell<S>,
    pub(crate) clock: C,
    pub(crate) settings: ClientSettings,
    pub(crate) animator: MoveAnimator,
    pub(crate) renderer: Cell<BoardRenderer>,
    pub(crate) session: RefCell<Option<GameSession>>,
    pub(crate) pending: PendingMoveSlot,
    pub(crate) input: RefCell<InputController>,
    pub(crate) drag: RefCell<DragState>,
    pub(crate) history: RefCell<MoveHistory>,
    pub(crate) busy: Cell<bool>,
    pub(crate) exhibition_paused: Cell<bool>,
}

impl<A: Authority, S: Surface> ChessClient<A, S, TokioClock> {
    pub fn new(authority: A, surface: S, settings: ClientSettings) -> Self {
        Self::with_clock(authority, surface, TokioClock, settings)
    }
}

impl<A: Authority, S: Surface, C: Clock> ChessClient<A, S, C> {
    pub fn with_clock(authority: A, surface: S, clock: C, settings: ClientSettings) -> Self {
        Self {
            authority,
            surface: RefCell::new(surface),
            clock,
            animator: MoveAnimator::new(settings.animation_duration()),
            settings,
            renderer: Cell::new(BoardRenderer::default()),
            session: RefCell::new(None),
            pending: PendingMoveSlot::new(),
            input: RefCell::new(InputController::default()),
            drag: RefCell::new(DragState::default()),
            history: RefCell::new(MoveHistory::default()),
            busy: Cell::new(false),
            exhibition_paused: Cell::new(false),
        }
    }

    pub fn authority(&self) -> &A {
        &self.authority
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Read access to the surface
    ///
    /// Do not hold the returned guard across an `.await` on this client.
    pub fn surface(&self) -> Ref<'_, S> {
        self.surface.borrow()
    }

    pub fn surface_mut(&self) -> RefMut<'_, S> {
        self.surface.borrow_mut()
    }

    pub fn session(&self) -> Option<GameSession> {
        self.session.borrow().clone()
    }

    pub fn renderer(&self) -> BoardRenderer {
        self.renderer.get()
    }

    pub fn pending_move(&self) -> Option<PendingMove> {
        self.pending.peek()
    }

    pub fn selection(&self) -> Selection {
        self.input.borrow().selection().clone()
    }

    /// Whether a move request or its animation is in progress
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    pub fn move_history(&self) -> Vec<String> {
        self.history.borrow().to_lines()
    }

    /// Create a game on the authority and set the board up for it
    ///
    /// The game is not started; call [`Self::begin_play`] for that.
    pub async fn start_new_game(&self, config: &NewGameConfig) -> ClientResult<GameSession> {
        let request = config.resolve(&mut rand::rng());
        let session_id = self.authority.start_session(&request).await?;
        self.initialize(&session_id, request.seats()).await?;
        self.session().ok_or(ClientError::NoSession)
    }

    /// Build the board for an existing session and render it
    ///
    /// Clears all per-game state. Leaves the game unstarted.
    pub async fn initialize(&self, session_id: &str, seats: Seats) -> ClientResult<()> {
        // uses the outgoing orientation to find the hidden piece
        self.abandon_drag();
        let session = GameSession::new(session_id, seats);
        let renderer = BoardRenderer::new(session.orientation());
        self.renderer.set(renderer);
        *self.session.borrow_mut() = Some(session);

        self.pending.take();
        self.input.borrow_mut().clear();
        self.history.borrow_mut().clear();
        self.exhibition_paused.set(false);

        {
            let mut surface = self.surface.borrow_mut();
            renderer.construct(&mut *surface);
            for sink in [
                TextSink::MoveList,
                TextSink::GameOverTitle,
                TextSink::GameOverDetails,
            ] {
                surface.set_text(sink, "");
            }
        }

        let snapshot = self.authority.get_snapshot(session_id).await?;
        *self.history.borrow_mut() = MoveHistory::starting_with(snapshot.turn);
        renderer.render(&mut *self.surface.borrow_mut(), &snapshot, None);
        tracing::info!(
            "[SESSION] Initialized {} ({:?}), {} to move",
            session_id,
            renderer.orientation(),
            snapshot.turn
        );
        Ok(())
    }

    /// Mark the game started and let an automated seat move if it is on turn
    pub async fn begin_play(&self) -> ClientResult<()> {
        match self.session.borrow_mut().as_mut() {
            Some(session) => session.mark_started(),
            None => return Err(ClientError::NoSession),
        }
        self.run_automated_turns().await;
        Ok(())
    }

    /// Pick up an existing session, possibly with different seat occupants
    pub async fn resume(&self, session_id: &str, seats: Seats) -> ClientResult<()> {
        let same_session = self
            .session
            .borrow()
            .as_ref()
            .is_some_and(|s| s.session_id == session_id);

        if same_session {
            self.abandon_drag();
            let orientation = {
                let mut guard = self.session.borrow_mut();
                let Some(session) = guard.as_mut() else {
                    return Err(ClientError::NoSession);
                };
                session.reconfigure(seats);
                session.orientation()
            };
            self.renderer.set(BoardRenderer::new(orientation));
            self.refresh().await?;
        } else {
            self.initialize(session_id, seats).await?;
        }
        self.begin_play().await
    }

    /// Re-fetch the snapshot and render it
    pub async fn refresh(&self) -> ClientResult<Snapshot> {
        let session_id = self.session_id().ok_or(ClientError::NoSession)?;
        let snapshot = self.authority.get_snapshot(&session_id).await?;
        let pending = self.pending.peek();
        self.renderer()
            .render(&mut *self.surface.borrow_mut(), &snapshot, pending.as_ref());
        Ok(snapshot)
    }

    pub(crate) fn session_id(&self) -> Option<String> {
        self.session.borrow().as_ref().map(|s| s.session_id.clone())
    }

    /// Fetch a snapshot, reflecting a failure on the status line
    pub(crate) async fn fetch_snapshot(&self, session_id: &str) -> Option<Snapshot> {
        match self.authority.get_snapshot(session_id).await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                self.reflect_failure(&e);
                None
            }
        }
    }

    /// Run the confirmed-move cycle for a move the authority accepted
    ///
    /// Returns the post-move snapshot, or `None` if it could not be fetched.
    /// A record without a piece is rendered without animation.
    pub(crate) async fn apply_confirmed_move(&self, record: MoveRecord) -> Option<Snapshot> {
        let session_id = self.session_id()?;
        if let Some(piece) = record.piece {
            self.pending.post(PendingMove {
                from: record.from,
                to: record.to,
                piece,
            });
        }
        self.history.borrow_mut().add_move(record);

        let Some(snapshot) = self.fetch_snapshot(&session_id).await else {
            self.pending.take();
            return None;
        };

        let renderer = self.renderer();
        let pending = self.pending.peek();
        renderer.render(&mut *self.surface.borrow_mut(), &snapshot, pending.as_ref());

        let result = self
            .animator
            .animate(&self.surface, &self.clock, &renderer, &snapshot, &self.pending)
            .await;
        if result == AnimationResult::Skipped {
            tracing::debug!("[ANIMATE] Move applied without animation");
        }

        {
            let mut surface = self.surface.borrow_mut();
            if snapshot.history.is_none() {
                let lines = self.history.borrow().to_lines();
                surface.set_text(TextSink::MoveList, &lines.join("\n"));
            }
            status::reflect_game_over(&mut *surface, &snapshot.status, snapshot.turn);
        }
        Some(snapshot)
    }

    pub(crate) fn clear_selection(&self) {
        self.input.borrow_mut().clear();
        let renderer = self.renderer();
        renderer.clear_highlights(&mut *self.surface.borrow_mut());
    }

    /// Transport failure: generic message, nothing else changes
    pub(crate) fn reflect_failure(&self, error: &AuthorityError) {
        tracing::error!("[NETWORK] Authority request failed: {}", error);
        status::reflect_message(&mut *self.surface.borrow_mut(), GENERIC_FAILURE_STATUS);
    }

    /// Rejected move: show the authority's reason verbatim
    pub(crate) fn reflect_rejection(&self, reason: Option<&str>) -> String {
        let reason = reason
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_REJECTION_STATUS)
            .to_string();
        tracing::warn!("[INPUT] Move rejected: {}", reason);
        status::reflect_message(&mut *self.surface.borrow_mut(), &reason);
        reason
    }
}

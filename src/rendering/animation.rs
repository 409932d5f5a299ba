//! Move animation
//!
//! Slides a transient piece from a pending move's origin to its destination,
//! hiding the static images at both endpoints meanwhile, then hands back to
//! the renderer for the final pass and clears the pending slot.
//!
//! Timing goes through [`Clock`] so tests can run with a paused tokio clock.

use crate::game::resources::{PendingMove, PendingMoveSlot};
use crate::game::types::Snapshot;
use crate::rendering::board::BoardRenderer;
use crate::rendering::surface::{OverlayId, Rect, Surface};
use async_trait::async_trait;
use std::cell::RefCell;
use std::time::Duration;
use web_time::Instant;

/// Roughly one display frame
pub const FRAME: Duration = Duration::from_millis(16);

/// Source of the animation's two suspension points
#[async_trait(?Send)]
pub trait Clock {
    /// Resolve at the next animation frame
    async fn next_frame(&self);

    async fn sleep(&self, duration: Duration);
}

/// [`Clock`] backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait(?Send)]
impl Clock for TokioClock {
    async fn next_frame(&self) {
        tokio::time::sleep(FRAME).await;
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// How an [`MoveAnimator::animate`] call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationResult {
    /// The transition ran and the board was re-rendered
    Animated,
    /// Nothing was pending; a plain render was done
    NothingPending,
    /// Endpoints could not be resolved; the pending move was dropped
    Skipped,
}

#[derive(Debug, Clone, Copy)]
pub struct MoveAnimator {
    duration: Duration,
}

impl Default for MoveAnimator {
    fn default() -> Self {
        Self::new(Duration::from_millis(280))
    }
}

impl MoveAnimator {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Animate the pending move, if any, and finish with a full render
    ///
    /// `snapshot` must be the authoritative state after the move. The final
    /// render only happens once the transient piece has arrived, and the
    /// pending slot is cleared on every path out of here. No borrow of
    /// `surface` is held across a suspension point.
    pub async fn animate<S, C>(
        &self,
        surface: &RefCell<S>,
        clock: &C,
        renderer: &BoardRenderer,
        snapshot: &Snapshot,
        pending: &PendingMoveSlot,
    ) -> AnimationResult
    where
        S: Surface,
        C: Clock + ?Sized,
    {
        let Some(mv) = pending.peek() else {
            renderer.render(&mut *surface.borrow_mut(), snapshot, None);
            return AnimationResult::NothingPending;
        };

        let started = Self::begin(&mut *surface.borrow_mut(), renderer, &mv);

        let Some((overlay, to_rect)) = started else {
            pending.take();
            renderer.render(&mut *surface.borrow_mut(), snapshot, None);
            return AnimationResult::Skipped;
        };

        let began = Instant::now();
        tracing::debug!(
            "[ANIMATE] {:?} {} -> {} over {:?}",
            mv.piece.kind,
            mv.from,
            mv.to,
            self.duration
        );

        clock.next_frame().await;

        let transitioning = surface
            .borrow_mut()
            .transition_overlay(overlay, to_rect, self.duration);
        if transitioning {
            clock.sleep(self.duration).await;
        } else {
            tracing::warn!("[ANIMATE] Moving piece vanished before its transition");
        }

        {
            let mut surface = surface.borrow_mut();
            renderer.render(&mut *surface, snapshot, Some(&mv));
            surface.remove_overlay(overlay);
        }
        pending.take();
        tracing::debug!("[ANIMATE] Finished in {:?}", began.elapsed());

        if transitioning {
            AnimationResult::Animated
        } else {
            AnimationResult::Skipped
        }
    }

    /// Spawn the transient piece and hide both endpoints
    fn begin<S: Surface>(
        surface: &mut S,
        renderer: &BoardRenderer,
        mv: &PendingMove,
    ) -> Option<(OverlayId, Rect)> {
        let from_key = renderer.key_for(mv.from);
        let to_key = renderer.key_for(mv.to);
        let from_rect = crate::safe_unwrap!(
            surface.square_rect(from_key),
            "[ANIMATE] Origin square missing, skipping animation",
            None
        );
        let to_rect = crate::safe_unwrap!(
            surface.square_rect(to_key),
            "[ANIMATE] Destination square missing, skipping animation",
            None
        );
        let overlay = crate::safe_unwrap!(
            surface.spawn_overlay(mv.piece, from_rect),
            "[ANIMATE] Could not create moving piece, skipping animation",
            None
        );
        surface.set_piece_hidden(from_key, true);
        surface.set_piece_hidden(to_key, true);
        Some((overlay, to_rect))
    }
}

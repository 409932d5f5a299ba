//! Drag-and-drop input
//!
//! An alternative front end over the same gate and submission path as
//! clicks. The destination comes from the pointer position relative to the
//! board's bounding box split into 8x8 equal cells; releasing outside that
//! box cancels without any request.

use crate::client::{BusyGuard, ChessClient};
use crate::game::types::{Piece, Position};
use crate::input::controller::{ClickOutcome, IgnoreReason};
use crate::networking::authority::Authority;
use crate::rendering::animation::Clock;
use crate::rendering::surface::{OverlayId, Point, Rect, SquareKey, Surface};

/// Pointer travel in pixels before a press becomes a drag
pub const DRAG_THRESHOLD: f32 = 5.0;

/// Visual cell under `point`, or `None` outside the board
pub fn cell_at(board: Rect, point: Point) -> Option<Position> {
    if !board.contains(point) || board.width <= 0.0 || board.height <= 0.0 {
        return None;
    }
    let col = ((point.x - board.x) / (board.width / 8.0)) as u8;
    let row = ((point.y - board.y) / (board.height / 8.0)) as u8;
    Position::new(row.min(7), col.min(7))
}

#[derive(Debug, Clone)]
struct ActiveDrag {
    origin: Position,
    piece: Piece,
    targets: Vec<Position>,
    press: Point,
    ghost: Option<OverlayId>,
}

#[derive(Debug, Default)]
pub struct DragState {
    active: Option<ActiveDrag>,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Forget any drag in progress, returning its origin and ghost
    ///
    /// The caller restores the surface: the ghost is still spawned and the
    /// origin piece may still be hidden.
    pub fn cancel(&mut self) -> Option<(Position, Option<OverlayId>)> {
        self.active.take().map(|d| (d.origin, d.ghost))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    Ignored(IgnoreReason),
    /// A piece was picked up and its legal targets highlighted
    Started { origin: Position, targets: usize },
    /// Released back on the origin square; the piece stays selected
    Dropped,
    /// Released outside the board, nothing sent
    Cancelled,
    /// Released on a square; the submission result
    Moved(ClickOutcome),
}

impl<A: Authority, S: Surface, C: Clock> ChessClient<A, S, C> {
    /// Pointer pressed on the board
    pub async fn press(&self, point: Point) -> DragOutcome {
        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            return DragOutcome::Ignored(IgnoreReason::Busy);
        };
        self.abandon_drag();

        let Some(visual) = self.cell_under(point) else {
            return DragOutcome::Ignored(IgnoreReason::OutsideBoard);
        };
        let (session, snapshot) = match self.input_gate().await {
            Ok(ready) => ready,
            Err(ClickOutcome::Ignored(reason)) => return DragOutcome::Ignored(reason),
            Err(outcome) => return DragOutcome::Moved(outcome),
        };

        let origin = self.renderer().position_for(SquareKey(visual));
        let Some(piece) = snapshot.piece_at(origin) else {
            return DragOutcome::Ignored(IgnoreReason::NothingToSelect);
        };
        let targets = match self.probe_origin(&session, &snapshot, origin).await {
            Ok(Some(targets)) => targets,
            Ok(None) => return DragOutcome::Ignored(IgnoreReason::NothingToSelect),
            Err(outcome) => return DragOutcome::Moved(outcome),
        };

        let count = targets.len();
        self.select_origin(origin, targets.clone());
        self.drag.borrow_mut().active = Some(ActiveDrag {
            origin,
            piece,
            targets,
            press: point,
            ghost: None,
        });
        tracing::debug!("[DRAG] Picked up {}", origin);
        DragOutcome::Started {
            origin,
            targets: count,
        }
    }

    /// Pointer moved with the button held; returns whether a drag is active
    pub fn drag_to(&self, point: Point) -> bool {
        let mut drag = self.drag.borrow_mut();
        let Some(active) = drag.active.as_mut() else {
            return false;
        };
        let mut surface = self.surface.borrow_mut();
        let origin_key = self.renderer().key_for(active.origin);

        match active.ghost {
            Some(ghost) => {
                if let Some(rect) = surface.square_rect(origin_key) {
                    surface.move_overlay(ghost, centered_on(rect, point));
                }
            }
            None if point.distance(active.press) > DRAG_THRESHOLD => {
                let Some(rect) = surface.square_rect(origin_key) else {
                    return true;
                };
                active.ghost = surface.spawn_overlay(active.piece, centered_on(rect, point));
                surface.set_piece_hidden(origin_key, true);
            }
            None => {}
        }
        true
    }

    /// Pointer released
    pub async fn release(&self, point: Point) -> DragOutcome {
        let Some(active) = self.drag.borrow_mut().active.take() else {
            return DragOutcome::Ignored(IgnoreReason::NoDragInProgress);
        };
        {
            let mut surface = self.surface.borrow_mut();
            if let Some(ghost) = active.ghost {
                surface.remove_overlay(ghost);
            }
            surface.set_piece_hidden(self.renderer().key_for(active.origin), false);
        }

        let Some(visual) = self.cell_under(point) else {
            tracing::debug!("[DRAG] Released outside the board, cancelled");
            self.clear_selection();
            return DragOutcome::Cancelled;
        };
        let destination = self.renderer().position_for(SquareKey(visual));
        if destination == active.origin {
            return DragOutcome::Dropped;
        }

        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            return DragOutcome::Ignored(IgnoreReason::Busy);
        };
        let (session, snapshot) = match self.input_gate().await {
            Ok(ready) => ready,
            Err(outcome) => {
                self.clear_selection();
                return DragOutcome::Moved(outcome);
            }
        };

        if !active.targets.contains(&destination) {
            self.clear_selection();
            return DragOutcome::Moved(ClickOutcome::Ignored(IgnoreReason::NotALegalTarget));
        }
        let outcome = self
            .submit_human_move(&session, &snapshot, active.origin, destination, &active.targets)
            .await;
        DragOutcome::Moved(outcome)
    }

    /// Drop a drag whose release never arrived and show its piece again
    pub(crate) fn abandon_drag(&self) {
        if !self.drag.borrow().is_dragging() {
            return;
        }
        let Some((origin, ghost)) = self.drag.borrow_mut().cancel() else {
            return;
        };
        tracing::debug!("[DRAG] Abandoned drag from {}", origin);
        let mut surface = self.surface.borrow_mut();
        if let Some(ghost) = ghost {
            surface.remove_overlay(ghost);
        }
        surface.set_piece_hidden(self.renderer().key_for(origin), false);
    }

    fn cell_under(&self, point: Point) -> Option<Position> {
        let board = crate::safe_unwrap!(
            self.surface.borrow().board_rect(),
            "[DRAG] Board element missing",
            None
        );
        cell_at(board, point)
    }
}

fn centered_on(cell: Rect, point: Point) -> Rect {
    Rect::new(
        point.x - cell.width / 2.0,
        point.y - cell.height / 2.0,
        cell.width,
        cell.height,
    )
}

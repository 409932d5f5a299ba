//! Presentation surface abstraction
//!
//! The renderer, animator and status reflector only ever touch the screen
//! through [`Surface`]. Every lookup may miss (the host can tear the board
//! down while a request is in flight), so operations report whether their
//! target existed instead of failing.

use crate::game::types::{Piece, PieceColor, Position};
use std::time::Duration;

/// Stable identifier of a square element, keyed by visual position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SquareKey(pub Position);

impl SquareKey {
    pub fn visual(self) -> Position {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    /// The selected origin square
    Selected,
    /// A legal destination of the selected piece
    LegalTarget,
}

/// Named text outputs on the host page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSink {
    Status,
    MoveList,
    WhiteCaptured,
    BlackCaptured,
    WhiteAdvantage,
    BlackAdvantage,
    GameOverTitle,
    GameOverDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Axis-aligned rectangle in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Handle to a transient piece element drawn above the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(pub u64);

/// DOM-like view the client draws into
///
/// Methods returning `bool` return `false` when their target element does
/// not exist; callers treat that as an abort, never a panic.
pub trait Surface {
    fn has_square(&self, key: SquareKey) -> bool;

    /// Create the square element if missing; existing squares are kept
    fn create_square(&mut self, key: SquareKey, light: bool) -> bool;

    /// Drop every square, used before a fresh board construction
    fn remove_all_squares(&mut self);

    /// Replace the piece drawn in a square; also makes it visible again
    fn set_piece(&mut self, key: SquareKey, piece: Option<Piece>) -> bool;

    /// Hide or show the static piece image without removing it
    fn set_piece_hidden(&mut self, key: SquareKey, hidden: bool) -> bool;

    fn set_highlight(&mut self, key: SquareKey, highlight: Highlight) -> bool;

    fn clear_highlights(&mut self);

    fn square_rect(&self, key: SquareKey) -> Option<Rect>;

    /// Bounding box of the whole 8x8 grid
    fn board_rect(&self) -> Option<Rect>;

    /// Draw a transient piece above all board content, ignoring pointer events
    fn spawn_overlay(&mut self, piece: Piece, at: Rect) -> Option<OverlayId>;

    /// Start moving an overlay to `to` over `duration`
    fn transition_overlay(&mut self, id: OverlayId, to: Rect, duration: Duration) -> bool;

    /// Reposition an overlay immediately, as during a drag
    fn move_overlay(&mut self, id: OverlayId, to: Rect) -> bool;

    fn remove_overlay(&mut self, id: OverlayId) -> bool;

    fn set_text(&mut self, sink: TextSink, text: &str) -> bool;

    /// Mark exactly one seat indicator as active
    fn set_seat_active(&mut self, color: PieceColor) -> bool;
}

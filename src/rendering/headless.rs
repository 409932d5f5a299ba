//! In-memory surface
//!
//! A [`Surface`] with no display behind it. Used by the command-line client
//! and by tests, which inspect what would be on screen.

use crate::game::types::{Piece, PieceColor, Position};
use crate::rendering::surface::{Highlight, OverlayId, Rect, SquareKey, Surface, TextSink};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct SquareElement {
    pub light: bool,
    pub piece: Option<Piece>,
    pub hidden: bool,
    pub highlight: Option<Highlight>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayElement {
    pub piece: Piece,
    pub rect: Rect,
    /// Destination and duration of the running transition, if any
    pub transition: Option<(Rect, Duration)>,
}

#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    board_size: f32,
    attached: bool,
    squares: HashMap<SquareKey, SquareElement>,
    overlays: HashMap<OverlayId, OverlayElement>,
    next_overlay: u64,
    texts: HashMap<TextSink, String>,
    active_seat: Option<PieceColor>,
    squares_created: usize,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new(480.0)
    }
}

impl HeadlessSurface {
    pub fn new(board_size: f32) -> Self {
        Self {
            board_size,
            attached: true,
            squares: HashMap::new(),
            overlays: HashMap::new(),
            next_overlay: 0,
            texts: HashMap::new(),
            active_seat: None,
            squares_created: 0,
        }
    }

    /// Simulate the host tearing the board down; every lookup misses afterwards
    pub fn detach(&mut self) {
        self.attached = false;
        self.squares.clear();
        self.overlays.clear();
        self.texts.clear();
        self.active_seat = None;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    fn cell_size(&self) -> f32 {
        self.board_size / 8.0
    }

    pub fn square(&self, key: SquareKey) -> Option<&SquareElement> {
        self.squares.get(&key)
    }

    /// The piece a viewer would see in a square (hidden pieces are not seen)
    pub fn visible_piece(&self, key: SquareKey) -> Option<Piece> {
        self.squares
            .get(&key)
            .filter(|sq| !sq.hidden)
            .and_then(|sq| sq.piece)
    }

    pub fn is_hidden(&self, key: SquareKey) -> bool {
        self.squares.get(&key).is_some_and(|sq| sq.hidden)
    }

    pub fn highlight(&self, key: SquareKey) -> Option<Highlight> {
        self.squares.get(&key).and_then(|sq| sq.highlight)
    }

    /// Squares currently highlighted, sorted
    pub fn highlighted(&self) -> Vec<(SquareKey, Highlight)> {
        let mut out: Vec<_> = self
            .squares
            .iter()
            .filter_map(|(key, sq)| sq.highlight.map(|h| (*key, h)))
            .collect();
        out.sort_by_key(|(key, _)| *key);
        out
    }

    pub fn overlays(&self) -> Vec<&OverlayElement> {
        self.overlays.values().collect()
    }

    pub fn text(&self, sink: TextSink) -> Option<&str> {
        self.texts.get(&sink).map(String::as_str)
    }

    pub fn active_seat(&self) -> Option<PieceColor> {
        self.active_seat
    }

    pub fn square_count(&self) -> usize {
        self.squares.len()
    }

    /// How many square elements have ever been created
    pub fn squares_created(&self) -> usize {
        self.squares_created
    }

    /// Count of visible pieces on the board, overlays excluded
    pub fn visible_piece_count(&self) -> usize {
        self.squares
            .values()
            .filter(|sq| !sq.hidden && sq.piece.is_some())
            .count()
    }

    /// Visible placement in visual row-major order
    pub fn placement(&self) -> Vec<Option<Piece>> {
        Position::all()
            .map(|pos| self.visible_piece(SquareKey(pos)))
            .collect()
    }

    /// Text picture of the visual grid, top row first
    pub fn to_ascii(&self) -> String {
        let mut out = String::new();
        for row in 0..8u8 {
            for col in 0..8u8 {
                let key = SquareKey(Position { row, col });
                let glyph = match self.visible_piece(key) {
                    Some(piece) => piece.code(),
                    None => '.',
                };
                if col > 0 {
                    out.push(' ');
                }
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }
}

impl Surface for HeadlessSurface {
    fn has_square(&self, key: SquareKey) -> bool {
        self.squares.contains_key(&key)
    }

    fn create_square(&mut self, key: SquareKey, light: bool) -> bool {
        if !self.attached {
            return false;
        }
        if !self.squares.contains_key(&key) {
            self.squares.insert(
                key,
                SquareElement {
                    light,
                    piece: None,
                    hidden: false,
                    highlight: None,
                },
            );
            self.squares_created += 1;
        }
        true
    }

    fn remove_all_squares(&mut self) {
        self.squares.clear();
    }

    fn set_piece(&mut self, key: SquareKey, piece: Option<Piece>) -> bool {
        match self.squares.get_mut(&key) {
            Some(square) => {
                square.piece = piece;
                square.hidden = false;
                true
            }
            None => false,
        }
    }

    fn set_piece_hidden(&mut self, key: SquareKey, hidden: bool) -> bool {
        match self.squares.get_mut(&key) {
            Some(square) => {
                square.hidden = hidden;
                true
            }
            None => false,
        }
    }

    fn set_highlight(&mut self, key: SquareKey, highlight: Highlight) -> bool {
        match self.squares.get_mut(&key) {
            Some(square) => {
                square.highlight = Some(highlight);
                true
            }
            None => false,
        }
    }

    fn clear_highlights(&mut self) {
        for square in self.squares.values_mut() {
            square.highlight = None;
        }
    }

    fn square_rect(&self, key: SquareKey) -> Option<Rect> {
        if !self.squares.contains_key(&key) {
            return None;
        }
        let cell = self.cell_size();
        let Position { row, col } = key.visual();
        Some(Rect::new(col as f32 * cell, row as f32 * cell, cell, cell))
    }

    fn board_rect(&self) -> Option<Rect> {
        self.attached
            .then(|| Rect::new(0.0, 0.0, self.board_size, self.board_size))
    }

    fn spawn_overlay(&mut self, piece: Piece, at: Rect) -> Option<OverlayId> {
        if !self.attached {
            return None;
        }
        let id = OverlayId(self.next_overlay);
        self.next_overlay += 1;
        self.overlays.insert(
            id,
            OverlayElement {
                piece,
                rect: at,
                transition: None,
            },
        );
        Some(id)
    }

    fn transition_overlay(&mut self, id: OverlayId, to: Rect, duration: Duration) -> bool {
        match self.overlays.get_mut(&id) {
            Some(overlay) => {
                overlay.transition = Some((to, duration));
                true
            }
            None => false,
        }
    }

    fn move_overlay(&mut self, id: OverlayId, to: Rect) -> bool {
        match self.overlays.get_mut(&id) {
            Some(overlay) => {
                overlay.rect = to;
                overlay.transition = None;
                true
            }
            None => false,
        }
    }

    fn remove_overlay(&mut self, id: OverlayId) -> bool {
        self.overlays.remove(&id).is_some()
    }

    fn set_text(&mut self, sink: TextSink, text: &str) -> bool {
        if !self.attached {
            return false;
        }
        self.texts.insert(sink, text.to_string());
        true
    }

    fn set_seat_active(&mut self, color: PieceColor) -> bool {
        if !self.attached {
            return false;
        }
        self.active_seat = Some(color);
        true
    }
}

//! Type definitions for the client's view of a chess game
//!
//! Everything here is a plain value. Pieces and positions are produced by
//! converting authority payloads once at the network boundary
//! ([`crate::networking::http`]) and never branch on payload shape afterwards.

use crate::game::resources::CapturedPieces;
use std::fmt;

/// Board square in authoritative addressing
///
/// `row` 0 is the top rank as the authority sees it (rank 8), `col` 0 is
/// file 'a'. Both components are always in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Create a position, or `None` if either component is off the board
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// All 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Position { row, col }))
    }

    /// The square rotated 180 degrees about the board centre
    pub const fn rotated(self) -> Self {
        Self {
            row: 7 - self.row,
            col: 7 - self.col,
        }
    }

    /// Whether the square is a light square
    pub const fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Side of the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    pub const fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Lowercase name as used on the wire
    pub const fn as_str(self) -> &'static str {
        match self {
            PieceColor::White => "white",
            PieceColor::Black => "black",
        }
    }

    /// Capitalised name for display
    pub const fn label(self) -> &'static str {
        match self {
            PieceColor::White => "White",
            PieceColor::Black => "Black",
        }
    }

    /// Parse `white`/`black` or the one-letter forms, any case
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "white" | "w" => Some(PieceColor::White),
            "black" | "b" => Some(PieceColor::Black),
            _ => None,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Standard material value in pawns
    ///
    /// King is 0 as it is never captured.
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Lowercase letter (`p`, `n`, `b`, `r`, `q`, `k`)
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    /// Parse a kind from its name or letter, any case
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "p" | "pawn" => Some(PieceKind::Pawn),
            "n" | "knight" => Some(PieceKind::Knight),
            "b" | "bishop" => Some(PieceKind::Bishop),
            "r" | "rook" => Some(PieceKind::Rook),
            "q" | "queen" => Some(PieceKind::Queen),
            "k" | "king" => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }

    /// One-letter code, uppercase for white (`P`, `n`, ...)
    pub fn code(self) -> char {
        match self.color {
            PieceColor::White => self.kind.letter().to_ascii_uppercase(),
            PieceColor::Black => self.kind.letter(),
        }
    }

    /// Parse a one-letter code, uppercase meaning white
    pub fn from_code(code: char) -> Option<Self> {
        let kind = PieceKind::parse(&code.to_string())?;
        let color = if code.is_ascii_uppercase() {
            PieceColor::White
        } else {
            PieceColor::Black
        };
        Some(Self { kind, color })
    }

    /// Image asset for this piece, e.g. `pieces/white_knight.png`
    pub fn image_path(self) -> String {
        format!("pieces/{}_{}.png", self.color.as_str(), self.kind.name())
    }
}

/// A completed move as reported by the authority
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Position,
    pub to: Position,
    pub piece: Option<Piece>,
}

/// One full authoritative board-plus-metadata payload
///
/// The client never derives a snapshot locally; every render starts from a
/// freshly fetched one.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub board: [[Option<Piece>; 8]; 8],
    pub status: String,
    pub turn: PieceColor,
    pub history: Option<Vec<MoveRecord>>,
    pub captured: Option<CapturedPieces>,
}

impl Snapshot {
    /// An empty board with `turn` to move
    pub fn empty(turn: PieceColor) -> Self {
        Self {
            board: [[None; 8]; 8],
            status: "active".to_string(),
            turn,
            history: None,
            captured: None,
        }
    }

    /// The standard starting position, white to move
    pub fn starting_position() -> Self {
        const BACK_ROW: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut snapshot = Self::empty(PieceColor::White);
        for (col, &kind) in BACK_ROW.iter().enumerate() {
            snapshot.board[0][col] = Some(Piece::new(kind, PieceColor::Black));
            snapshot.board[1][col] = Some(Piece::new(PieceKind::Pawn, PieceColor::Black));
            snapshot.board[6][col] = Some(Piece::new(PieceKind::Pawn, PieceColor::White));
            snapshot.board[7][col] = Some(Piece::new(kind, PieceColor::White));
        }
        snapshot
    }

    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.board[pos.row as usize][pos.col as usize]
    }

    pub fn set_piece(&mut self, pos: Position, piece: Option<Piece>) {
        self.board[pos.row as usize][pos.col as usize] = piece;
    }

    /// Number of occupied squares
    pub fn piece_count(&self) -> usize {
        self.board.iter().flatten().filter(|p| p.is_some()).count()
    }
}

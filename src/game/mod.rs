//! Game module
//!
//! Plain data the client keeps between authority round trips: board and
//! piece types, the session context, and small per-game resources. Rules
//! and legality live entirely on the authority.

pub mod ai;
pub mod error;
pub mod resources;
pub mod session;
pub mod types;

pub use error::{NotationError, NotationResult};
pub use session::{ColorPreference, GameSession, NewGameConfig, SeatOccupant, Seats, SessionRequest};
pub use types::{MoveRecord, Piece, PieceColor, PieceKind, Position, Snapshot};

//! Client-side game state
//!
//! Small value types owned by [`crate::ChessClient`]: the pending-move slot,
//! the current selection, captured tallies, move history and game outcome.
//! None of them know how to talk to the authority.

pub mod captured;
pub mod game_over;
pub mod history;
pub mod pending;
pub mod selection;

pub use captured::CapturedPieces;
pub use game_over::{GameOutcome, is_terminal};
pub use history::MoveHistory;
pub use pending::{PendingMove, PendingMoveSlot};
pub use selection::Selection;

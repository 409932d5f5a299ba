//! The game authority contract
//!
//! The remote source of truth for legal moves and board state, consumed
//! through exactly these operations. [`crate::networking::http::HttpAuthority`]
//! is the production implementation; tests script their own.

use crate::game::session::SessionRequest;
use crate::game::types::{MoveRecord, PieceColor, Position, Snapshot};
use crate::networking::error::AuthorityResult;
use async_trait::async_trait;
use shared::protocol::BotProfile;

/// Reply to a move submission
///
/// `success == false` is a rejection; `error` then carries the reason.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    pub success: bool,
    pub status: Option<String>,
    pub turn: Option<PieceColor>,
    pub error: Option<String>,
}

impl MoveOutcome {
    pub fn accepted(status: impl Into<String>, turn: PieceColor) -> Self {
        Self {
            success: true,
            status: Some(status.into()),
            turn: Some(turn),
            error: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            status: None,
            turn: None,
            error: Some(reason.into()),
        }
    }
}

/// Reply to a request for an automated move
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AutomatedMoveOutcome {
    pub success: bool,
    pub status: Option<String>,
    pub mv: Option<MoveRecord>,
    pub error: Option<String>,
}

/// Operations the client needs from the authority
///
/// Futures are not `Send`: the client runs on one thread and keeps its
/// state in `RefCell`s.
#[async_trait(?Send)]
pub trait Authority {
    /// Full board state, status, turn and optional history/captures
    async fn get_snapshot(&self, session_id: &str) -> AuthorityResult<Snapshot>;

    /// Legal destinations for the occupant of `position`
    ///
    /// Empty when the square is empty or its owner is not to move.
    async fn get_legal_moves(
        &self,
        session_id: &str,
        position: Position,
    ) -> AuthorityResult<Vec<Position>>;

    /// Attempt a move; on success the board has already changed remotely
    async fn submit_move(
        &self,
        session_id: &str,
        from: Position,
        to: Position,
    ) -> AuthorityResult<MoveOutcome>;

    /// Have the authority move for an automated seat
    async fn request_automated_move(
        &self,
        session_id: &str,
        color: Option<PieceColor>,
    ) -> AuthorityResult<AutomatedMoveOutcome>;

    /// Create a game, returning its session id
    async fn start_session(&self, request: &SessionRequest) -> AuthorityResult<String>;

    /// Catalogue of automated players
    async fn list_bots(&self) -> AuthorityResult<Vec<BotProfile>>;
}

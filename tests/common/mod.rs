//! Scripted in-memory authority for integration tests
//!
//! Holds one game whose board only changes when a move is accepted. Legal
//! moves and automated replies are scripted by each test.

#![allow(dead_code)]

use async_trait::async_trait;
use chessboard_client::core::ClientSettings;
use chessboard_client::game::{
    MoveRecord, PieceColor, Position, SessionRequest, Snapshot,
};
use chessboard_client::networking::authority::{Authority, AutomatedMoveOutcome, MoveOutcome};
use chessboard_client::networking::error::{AuthorityError, AuthorityResult};
use chessboard_client::rendering::board::from_notation;
use chessboard_client::{ChessClient, HeadlessSurface};
use shared::protocol::BotProfile;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

pub const SESSION_ID: &str = "test-session";

/// One authority call, as recorded by [`FakeAuthority`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Snapshot,
    LegalMoves(Position),
    Submit(Position, Position),
    Automated(Option<PieceColor>),
    Start(SessionRequest),
    ListBots,
}

pub struct FakeAuthority {
    pub snapshot: RefCell<Snapshot>,
    pub legal: RefCell<HashMap<Position, Vec<Position>>>,
    pub bot_moves: RefCell<VecDeque<(Position, Position)>>,
    /// Status to report after each accepted move, `"active"` once exhausted
    pub statuses: RefCell<VecDeque<String>>,
    pub reject_with: RefCell<Option<String>>,
    pub transport_down: Cell<bool>,
    pub calls: RefCell<Vec<Call>>,
    pub moves_applied: Cell<usize>,
}

impl Default for FakeAuthority {
    fn default() -> Self {
        Self {
            snapshot: RefCell::new(Snapshot::starting_position()),
            legal: RefCell::new(HashMap::new()),
            bot_moves: RefCell::new(VecDeque::new()),
            statuses: RefCell::new(VecDeque::new()),
            reject_with: RefCell::new(None),
            transport_down: Cell::new(false),
            calls: RefCell::new(Vec::new()),
            moves_applied: Cell::new(0),
        }
    }
}

impl FakeAuthority {
    /// Declare `targets` legal for the piece on `from` (notation)
    pub fn allow(&self, from: &str, targets: &[&str]) {
        let targets = targets.iter().map(|t| sq(t)).collect();
        self.legal.borrow_mut().insert(sq(from), targets);
    }

    /// Queue an automated reply
    pub fn script_bot(&self, from: &str, to: &str) {
        self.bot_moves.borrow_mut().push_back((sq(from), sq(to)));
    }

    pub fn script_status(&self, status: &str) {
        self.statuses.borrow_mut().push_back(status.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn submit_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Submit(..)))
            .count()
    }

    pub fn automated_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Automated(..)))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn check_transport(&self) -> AuthorityResult<()> {
        if self.transport_down.get() {
            Err(AuthorityError::Status {
                code: 503,
                body: "unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn apply(&self, from: Position, to: Position) -> String {
        let status = self
            .statuses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| "active".to_string());
        let mut snapshot = self.snapshot.borrow_mut();
        let piece = snapshot.piece_at(from);
        snapshot.set_piece(from, None);
        snapshot.set_piece(to, piece);
        snapshot.turn = snapshot.turn.opposite();
        snapshot.status = status.clone();
        self.moves_applied.set(self.moves_applied.get() + 1);
        status
    }
}

#[async_trait(?Send)]
impl Authority for FakeAuthority {
    async fn get_snapshot(&self, _session_id: &str) -> AuthorityResult<Snapshot> {
        self.record(Call::Snapshot);
        self.check_transport()?;
        Ok(self.snapshot.borrow().clone())
    }

    async fn get_legal_moves(
        &self,
        _session_id: &str,
        position: Position,
    ) -> AuthorityResult<Vec<Position>> {
        self.record(Call::LegalMoves(position));
        self.check_transport()?;
        Ok(self.legal.borrow().get(&position).cloned().unwrap_or_default())
    }

    async fn submit_move(
        &self,
        _session_id: &str,
        from: Position,
        to: Position,
    ) -> AuthorityResult<MoveOutcome> {
        self.record(Call::Submit(from, to));
        self.check_transport()?;
        if let Some(reason) = self.reject_with.borrow().clone() {
            return Ok(MoveOutcome::rejected(reason));
        }
        let legal = self
            .legal
            .borrow()
            .get(&from)
            .is_some_and(|targets| targets.contains(&to));
        if !legal {
            return Ok(MoveOutcome::rejected("Illegal move"));
        }
        let status = self.apply(from, to);
        let turn = self.snapshot.borrow().turn;
        Ok(MoveOutcome::accepted(status, turn))
    }

    async fn request_automated_move(
        &self,
        _session_id: &str,
        color: Option<PieceColor>,
    ) -> AuthorityResult<AutomatedMoveOutcome> {
        self.record(Call::Automated(color));
        self.check_transport()?;
        let next = self.bot_moves.borrow_mut().pop_front();
        match next {
            Some((from, to)) => {
                let status = self.apply(from, to);
                Ok(AutomatedMoveOutcome {
                    success: true,
                    status: Some(status),
                    mv: Some(MoveRecord {
                        from,
                        to,
                        piece: None,
                    }),
                    error: None,
                })
            }
            None => Ok(AutomatedMoveOutcome {
                success: false,
                status: None,
                mv: None,
                error: Some("No move available".to_string()),
            }),
        }
    }

    async fn start_session(&self, request: &SessionRequest) -> AuthorityResult<String> {
        self.record(Call::Start(request.clone()));
        self.check_transport()?;
        Ok(SESSION_ID.to_string())
    }

    async fn list_bots(&self) -> AuthorityResult<Vec<BotProfile>> {
        self.record(Call::ListBots);
        Ok(vec![BotProfile {
            id: "minimax".to_string(),
            name: "Minimax".to_string(),
            display_name: None,
            description: None,
            avatar: None,
        }])
    }
}

pub type TestClient = ChessClient<FakeAuthority, HeadlessSurface>;

pub fn client_with(authority: FakeAuthority) -> TestClient {
    ChessClient::new(authority, HeadlessSurface::new(480.0), ClientSettings::default())
}

/// Square from notation, panicking on typos in test code
pub fn sq(notation: &str) -> Position {
    from_notation(notation).expect("valid square in test")
}

//! HTTP authority client
//!
//! Talks JSON to the game server with `reqwest` and converts every payload
//! into domain types here, once. Pieces arrive either as one-letter codes or
//! as `{type, color}` records; nothing past this module sees the difference.

use crate::game::resources::CapturedPieces;
use crate::game::session::SessionRequest;
use crate::game::types::{MoveRecord, Piece, PieceColor, PieceKind, Position, Snapshot};
use crate::networking::authority::{Authority, AutomatedMoveOutcome, MoveOutcome};
use crate::networking::error::{AuthorityError, AuthorityResult};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use shared::protocol::{
    BoardResponse, BotMoveRequest, BotMoveResponse, BotProfile, BotsResponse, MoveRequest,
    MoveResponse, NewBotGameRequest, NewBotsGameRequest, NewGameResponse, ValidMovesResponse,
    WireCaptured, WireMove, WirePiece, WireSquare, endpoints,
};

/// [`Authority`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpAuthority {
    client: Client,
    base_url: Url,
}

impl HttpAuthority {
    pub fn new(base_url: &str) -> AuthorityResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| AuthorityError::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> AuthorityResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AuthorityError::InvalidUrl(format!("{path}: {e}")))
    }

    fn url_with_query(&self, path: &str, query: &[(&str, &str)]) -> AuthorityResult<Url> {
        let mut url = self.url(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Read endpoints: anything but a 2xx is an error
    async fn get_strict<T: DeserializeOwned>(&self, url: Url) -> AuthorityResult<T> {
        tracing::debug!("[NETWORK] GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AuthorityError::Status {
                code: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body).map_err(|e| AuthorityError::Malformed(e.to_string()))
    }

    /// Move endpoints: a client-error status with a readable body is a
    /// rejection, not a transport failure
    async fn post_lenient<B, T>(&self, path: &str, body: &B) -> AuthorityResult<T>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        tracing::debug!("[NETWORK] POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() || status.is_client_error() {
            if let Ok(parsed) = serde_json::from_str::<T>(&text) {
                return Ok(parsed);
            }
        }
        if status.is_success() {
            Err(AuthorityError::Malformed(format!("unreadable body: {text}")))
        } else {
            Err(AuthorityError::Status {
                code: status.as_u16(),
                body: text,
            })
        }
    }
}

#[async_trait(?Send)]
impl Authority for HttpAuthority {
    async fn get_snapshot(&self, session_id: &str) -> AuthorityResult<Snapshot> {
        let url = self.url_with_query(endpoints::BOARD, &[("session_id", session_id)])?;
        let response: BoardResponse = self.get_strict(url).await?;
        snapshot_from_wire(response)
    }

    async fn get_legal_moves(
        &self,
        session_id: &str,
        position: Position,
    ) -> AuthorityResult<Vec<Position>> {
        let position_param = format!("{},{}", position.row, position.col);
        let url = self.url_with_query(
            endpoints::VALID_MOVES,
            &[("session_id", session_id), ("position", &position_param)],
        )?;
        let response: ValidMovesResponse = self.get_strict(url).await?;
        if let Some(error) = response.error {
            return Err(AuthorityError::Malformed(error));
        }
        response.valid_moves.into_iter().map(position_from_wire).collect()
    }

    async fn submit_move(
        &self,
        session_id: &str,
        from: Position,
        to: Position,
    ) -> AuthorityResult<MoveOutcome> {
        let request = MoveRequest {
            session_id: session_id.to_string(),
            from: position_to_wire(from),
            to: position_to_wire(to),
        };
        let response: MoveResponse = self.post_lenient(endpoints::MOVE, &request).await?;
        let turn = response.turn.as_deref().map(color_from_wire).transpose()?;
        Ok(MoveOutcome {
            success: response.success,
            status: response.status,
            turn,
            error: response.error,
        })
    }

    async fn request_automated_move(
        &self,
        session_id: &str,
        color: Option<PieceColor>,
    ) -> AuthorityResult<AutomatedMoveOutcome> {
        let request = BotMoveRequest {
            session_id: session_id.to_string(),
            bot_color: color.map(|c| c.as_str().to_string()),
        };
        let response: BotMoveResponse = self.post_lenient(endpoints::BOT_MOVE, &request).await?;
        let mv = response.mv.map(move_from_wire).transpose()?;
        Ok(AutomatedMoveOutcome {
            success: response.success,
            status: response.status,
            mv,
            error: response.error,
        })
    }

    async fn start_session(&self, request: &SessionRequest) -> AuthorityResult<String> {
        let response: NewGameResponse = match request {
            SessionRequest::VsBot { human, bot } => {
                let body = NewBotGameRequest {
                    bot_color: human.opposite().as_str().to_string(),
                    bot: bot.clone(),
                };
                self.post_lenient(endpoints::NEW_GAME_VS_BOT, &body).await?
            }
            SessionRequest::Exhibition {
                white_bot,
                black_bot,
            } => {
                let body = NewBotsGameRequest {
                    white_bot: white_bot.clone(),
                    black_bot: black_bot.clone(),
                };
                self.post_lenient(endpoints::NEW_GAME_BOTS, &body).await?
            }
        };

        match response.session_id {
            Some(id) if !id.is_empty() => {
                tracing::info!("[NETWORK] New session {}", id);
                Ok(id)
            }
            _ => Err(AuthorityError::Malformed(
                response
                    .error
                    .unwrap_or_else(|| "response carried no session id".to_string()),
            )),
        }
    }

    async fn list_bots(&self) -> AuthorityResult<Vec<BotProfile>> {
        let response: BotsResponse = self.get_strict(self.url(endpoints::BOTS)?).await?;
        Ok(response.bots)
    }
}

// Wire -> domain conversion. Every authority payload passes through here.

pub fn position_from_wire(square: WireSquare) -> AuthorityResult<Position> {
    Position::new(square[0], square[1])
        .ok_or_else(|| AuthorityError::Malformed(format!("square {:?} is off the board", square)))
}

pub fn position_to_wire(pos: Position) -> WireSquare {
    [pos.row, pos.col]
}

pub fn color_from_wire(color: &str) -> AuthorityResult<PieceColor> {
    PieceColor::parse(color).ok_or_else(|| AuthorityError::Malformed(format!("unknown color {color:?}")))
}

pub fn piece_from_wire(piece: &WirePiece) -> AuthorityResult<Piece> {
    match piece {
        WirePiece::Code(code) => {
            let mut chars = code.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Piece::from_code(c),
                _ => None,
            }
            .ok_or_else(|| AuthorityError::Malformed(format!("unknown piece code {code:?}")))
        }
        WirePiece::Record { kind, color } => {
            let kind = PieceKind::parse(kind)
                .ok_or_else(|| AuthorityError::Malformed(format!("unknown piece type {kind:?}")))?;
            Ok(Piece::new(kind, color_from_wire(color)?))
        }
    }
}

pub fn move_from_wire(mv: WireMove) -> AuthorityResult<MoveRecord> {
    Ok(MoveRecord {
        from: position_from_wire(mv.from)?,
        to: position_from_wire(mv.to)?,
        piece: mv.piece.as_ref().map(piece_from_wire).transpose()?,
    })
}

fn captured_from_wire(captured: WireCaptured) -> AuthorityResult<CapturedPieces> {
    let kinds = |names: Vec<String>| -> AuthorityResult<Vec<PieceKind>> {
        names
            .iter()
            .map(|name| {
                PieceKind::parse(name).ok_or_else(|| {
                    AuthorityError::Malformed(format!("unknown captured piece {name:?}"))
                })
            })
            .collect()
    };
    Ok(CapturedPieces {
        white_captured: kinds(captured.white)?,
        black_captured: kinds(captured.black)?,
    })
}

pub fn snapshot_from_wire(response: BoardResponse) -> AuthorityResult<Snapshot> {
    if let Some(error) = response.error {
        return Err(AuthorityError::Malformed(error));
    }
    if response.board.len() != 8 || response.board.iter().any(|row| row.len() != 8) {
        return Err(AuthorityError::Malformed("board is not 8x8".to_string()));
    }

    let turn = match response.turn.as_deref() {
        Some(turn) => color_from_wire(turn)?,
        None => return Err(AuthorityError::Malformed("snapshot has no turn".to_string())),
    };

    let mut snapshot = Snapshot::empty(turn);
    snapshot.status = response.status;
    for (row, cells) in response.board.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if let Some(piece) = cell {
                let pos = Position {
                    row: row as u8,
                    col: col as u8,
                };
                snapshot.set_piece(pos, Some(piece_from_wire(piece)?));
            }
        }
    }
    snapshot.history = response
        .history
        .map(|moves| moves.into_iter().map(move_from_wire).collect())
        .transpose()?;
    snapshot.captured = response.captured.map(captured_from_wire).transpose()?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_json(cells: &str) -> String {
        format!(r#"{{"board": {cells}, "status": "active", "turn": "black"}}"#)
    }

    fn starting_board() -> String {
        r#"[
            ["r","n","b","q","k","b","n","r"],
            ["p","p","p","p","p","p","p","p"],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,{"type":"pawn","color":"white"},null,null,null],
            [null,null,null,null,null,null,null,null],
            ["P","P","P","P",null,"P","P","P"],
            ["R","N","B","Q","K","B","N","R"]
        ]"#
        .to_string()
    }

    #[test]
    fn test_piece_shapes_convert_identically() {
        //! Letter codes and records describe the same piece
        let code = piece_from_wire(&WirePiece::Code("N".to_string())).expect("code");
        let record = piece_from_wire(&WirePiece::Record {
            kind: "Knight".to_string(),
            color: "w".to_string(),
        })
        .expect("record");
        assert_eq!(code, record);
        assert_eq!(code, Piece::new(PieceKind::Knight, PieceColor::White));
    }

    #[test]
    fn test_bad_piece_is_malformed() {
        assert!(matches!(
            piece_from_wire(&WirePiece::Code("x".to_string())),
            Err(AuthorityError::Malformed(_))
        ));
        assert!(matches!(
            piece_from_wire(&WirePiece::Code("Nn".to_string())),
            Err(AuthorityError::Malformed(_))
        ));
        assert!(matches!(
            piece_from_wire(&WirePiece::Record {
                kind: "pawn".to_string(),
                color: "green".to_string()
            }),
            Err(AuthorityError::Malformed(_))
        ));
    }

    #[test]
    fn test_snapshot_from_mixed_board() {
        let response: BoardResponse =
            serde_json::from_str(&board_json(&starting_board())).expect("json");
        let snapshot = snapshot_from_wire(response).expect("snapshot");

        assert_eq!(snapshot.turn, PieceColor::Black);
        assert_eq!(snapshot.piece_count(), 32);
        assert_eq!(snapshot.piece_at(Position { row: 6, col: 4 }), None);
        assert_eq!(
            snapshot.piece_at(Position { row: 4, col: 4 }),
            Some(Piece::new(PieceKind::Pawn, PieceColor::White))
        );
        assert_eq!(
            snapshot.piece_at(Position { row: 0, col: 3 }),
            Some(Piece::new(PieceKind::Queen, PieceColor::Black))
        );
    }

    #[test]
    fn test_snapshot_rejects_short_board() {
        let response: BoardResponse =
            serde_json::from_str(&board_json(r#"[["r", null]]"#)).expect("json");
        assert!(matches!(
            snapshot_from_wire(response),
            Err(AuthorityError::Malformed(_))
        ));
    }

    #[test]
    fn test_snapshot_history_and_captures() {
        let json = format!(
            r#"{{"board": {}, "status": "active", "turn": "black",
                "history": [{{"from": [6, 4], "to": [4, 4], "piece": "P"}}],
                "captured": {{"white": ["knight"], "black": []}}}}"#,
            starting_board()
        );
        let response: BoardResponse = serde_json::from_str(&json).expect("json");
        let snapshot = snapshot_from_wire(response).expect("snapshot");

        let history = snapshot.history.expect("history");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].from, Position { row: 6, col: 4 });
        assert_eq!(
            history[0].piece,
            Some(Piece::new(PieceKind::Pawn, PieceColor::White))
        );
        let captured = snapshot.captured.expect("captured");
        assert_eq!(captured.white_captured, vec![PieceKind::Knight]);
        assert_eq!(captured.material_advantage(), 3);
    }

    #[test]
    fn test_off_board_square_is_malformed() {
        assert!(position_from_wire([8, 0]).is_err());
        assert_eq!(
            position_from_wire([6, 4]).expect("square"),
            Position { row: 6, col: 4 }
        );
    }

    #[test]
    fn test_url_building() {
        let authority = HttpAuthority::new("http://localhost:5000").expect("url");
        let url = authority
            .url_with_query(endpoints::VALID_MOVES, &[("session_id", "a b"), ("position", "6,4")])
            .expect("url");
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/valid-moves?session_id=a+b&position=6%2C4"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpAuthority::new("not a url"),
            Err(AuthorityError::InvalidUrl(_))
        ));
    }
}

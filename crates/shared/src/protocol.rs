use serde::{Deserialize, Serialize};

/// HTTP routes exposed by the game authority
pub mod endpoints {
    pub const BOARD: &str = "/api/board";
    pub const VALID_MOVES: &str = "/api/valid-moves";
    pub const MOVE: &str = "/api/move";
    pub const BOT_MOVE: &str = "/api/bot-move";
    pub const NEW_GAME_VS_BOT: &str = "/api/new-game/bot";
    pub const NEW_GAME_BOTS: &str = "/api/new-game/bots";
    pub const BOTS: &str = "/api/bots";
}

/// Square as sent on the wire: `[row, col]`, row 0 = rank 8
pub type WireSquare = [u8; 2];

/// A piece as the authority sends it.
///
/// Older endpoints send one-letter codes (`"P"` white pawn, `"q"` black queen),
/// newer ones a `{type, color}` record. Both shapes are accepted here and
/// normalised by the client exactly once.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum WirePiece {
    Code(String),
    Record {
        #[serde(rename = "type")]
        kind: String,
        color: String,
    },
}

/// A completed move as reported by the authority
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WireMove {
    pub from: WireSquare,
    pub to: WireSquare,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub piece: Option<WirePiece>,
}

/// Captured piece kinds, keyed by the side that did the capturing
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct WireCaptured {
    #[serde(default)]
    pub white: Vec<String>,
    #[serde(default)]
    pub black: Vec<String>,
}

// Client → Authority

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    pub session_id: String,
    pub from: WireSquare,
    pub to: WireSquare,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BotMoveRequest {
    pub session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_color: Option<String>,
}

/// Human vs bot: `bot_color` is the seat the bot takes
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NewBotGameRequest {
    pub bot_color: String,
    /// Specific bot to seat; the authority picks its default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<String>,
}

/// Bot vs bot exhibition
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NewBotsGameRequest {
    pub white_bot: String,
    pub black_bot: String,
}

// Authority → Client

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardResponse {
    #[serde(default)]
    pub board: Vec<Vec<Option<WirePiece>>>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub turn: Option<String>,
    #[serde(default)]
    pub history: Option<Vec<WireMove>>,
    #[serde(default)]
    pub captured: Option<WireCaptured>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidMovesResponse {
    #[serde(default)]
    pub valid_moves: Vec<WireSquare>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub turn: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct BotMoveResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "move")]
    pub mv: Option<WireMove>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct NewGameResponse {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One entry of the authority's bot catalogue
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BotProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl BotProfile {
    /// Name to show in menus, preferring the display name
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct BotsResponse {
    #[serde(default)]
    pub bots: Vec<BotProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_piece_accepts_letter_code() {
        let piece: WirePiece = serde_json::from_str(r#""N""#).expect("Should deserialize");
        assert_eq!(piece, WirePiece::Code("N".to_string()));
    }

    #[test]
    fn test_wire_piece_accepts_record() {
        let json = r#"{"type": "Knight", "color": "black", "symbol": "n"}"#;
        let piece: WirePiece = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(
            piece,
            WirePiece::Record {
                kind: "Knight".to_string(),
                color: "black".to_string()
            }
        );
    }

    #[test]
    fn test_board_response_with_mixed_cells() {
        let json = r#"{
            "board": [["r", null, {"type": "p", "color": "b"}]],
            "status": "active",
            "turn": "white"
        }"#;
        let response: BoardResponse = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(response.board[0].len(), 3);
        assert!(response.board[0][1].is_none());
        assert_eq!(response.turn.as_deref(), Some("white"));
        assert!(response.history.is_none());
        assert!(response.captured.is_none());
    }

    #[test]
    fn test_move_request_serialization() {
        let request = MoveRequest {
            session_id: "abc".to_string(),
            from: [6, 4],
            to: [4, 4],
        };
        let json = serde_json::to_string(&request).expect("Should serialize");
        assert_eq!(json, r#"{"session_id":"abc","from":[6,4],"to":[4,4]}"#);
    }

    #[test]
    fn test_bot_move_request_omits_missing_color() {
        let request = BotMoveRequest {
            session_id: "abc".to_string(),
            bot_color: None,
        };
        let json = serde_json::to_string(&request).expect("Should serialize");
        assert!(!json.contains("bot_color"));
    }

    #[test]
    fn test_new_bot_game_request_omits_default_bot() {
        let request = NewBotGameRequest {
            bot_color: "black".to_string(),
            bot: None,
        };
        let json = serde_json::to_string(&request).expect("Should serialize");
        assert_eq!(json, r#"{"bot_color":"black"}"#);
    }

    #[test]
    fn test_bot_move_response_reads_move_field() {
        let json = r#"{"success": true, "status": "active", "move": {"from": [1, 4], "to": [3, 4], "piece": "p"}}"#;
        let response: BotMoveResponse = serde_json::from_str(json).expect("Should deserialize");
        assert!(response.success);
        let mv = response.mv.expect("move should be present");
        assert_eq!(mv.from, [1, 4]);
        assert_eq!(mv.to, [3, 4]);
        assert_eq!(mv.piece, Some(WirePiece::Code("p".to_string())));
    }

    #[test]
    fn test_move_response_failure_defaults() {
        let json = r#"{"error": "Illegal move"}"#;
        let response: MoveResponse = serde_json::from_str(json).expect("Should deserialize");
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Illegal move"));
        assert!(response.turn.is_none());
    }

    #[test]
    fn test_bot_profile_label_prefers_display_name() {
        let json = r#"{"bots": [
            {"id": "white_idiot", "name": "WhiteIdiot", "display_name": "Wyatt"},
            {"id": "black_idiot", "name": "Moose"}
        ]}"#;
        let response: BotsResponse = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(response.bots[0].label(), "Wyatt");
        assert_eq!(response.bots[1].label(), "Moose");
    }
}

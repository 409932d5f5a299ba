//! Game session context
//!
//! Session identity, seat occupants and the started flag, held as one
//! explicit value owned by [`crate::ChessClient`] instead of ambient state.
//! Written at game start (or on an explicit resume), read everywhere else.

use crate::game::types::PieceColor;
use crate::rendering::board::coordinates::Orientation;
use rand::Rng;

/// Who sits in a seat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatOccupant {
    Human,
    /// Identifier of an automated player known to the authority
    Automated(String),
}

impl SeatOccupant {
    /// Parse `human` or a bot identifier
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("human") {
            SeatOccupant::Human
        } else {
            SeatOccupant::Automated(trimmed.to_string())
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, SeatOccupant::Human)
    }

    pub fn bot_id(&self) -> Option<&str> {
        match self {
            SeatOccupant::Human => None,
            SeatOccupant::Automated(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seats {
    pub white: SeatOccupant,
    pub black: SeatOccupant,
}

impl Seats {
    /// Human on `human`, `bot` opposite
    pub fn human_vs_bot(human: PieceColor, bot: impl Into<String>) -> Self {
        let bot = SeatOccupant::Automated(bot.into());
        match human {
            PieceColor::White => Self {
                white: SeatOccupant::Human,
                black: bot,
            },
            PieceColor::Black => Self {
                white: bot,
                black: SeatOccupant::Human,
            },
        }
    }

    pub fn exhibition(white: impl Into<String>, black: impl Into<String>) -> Self {
        Self {
            white: SeatOccupant::Automated(white.into()),
            black: SeatOccupant::Automated(black.into()),
        }
    }

    pub fn occupant(&self, color: PieceColor) -> &SeatOccupant {
        match color {
            PieceColor::White => &self.white,
            PieceColor::Black => &self.black,
        }
    }

    pub fn is_automated(&self, color: PieceColor) -> bool {
        !self.occupant(color).is_human()
    }

    /// Whether both seats are automated
    pub fn is_exhibition(&self) -> bool {
        self.is_automated(PieceColor::White) && self.is_automated(PieceColor::Black)
    }

    /// The single human seat, if exactly one side is human
    ///
    /// With two humans White is reported, matching the unrotated board.
    pub fn human_color(&self) -> Option<PieceColor> {
        match (self.white.is_human(), self.black.is_human()) {
            (true, _) => Some(PieceColor::White),
            (false, true) => Some(PieceColor::Black),
            (false, false) => None,
        }
    }
}

/// The live game context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub session_id: String,
    pub seats: Seats,
    pub started: bool,
}

impl GameSession {
    /// A session that is set up but not yet started
    pub fn new(session_id: impl Into<String>, seats: Seats) -> Self {
        Self {
            session_id: session_id.into(),
            seats,
            started: false,
        }
    }

    pub fn mark_started(&mut self) {
        if !self.started {
            tracing::info!("[SESSION] Game {} started", self.session_id);
        }
        self.started = true;
    }

    /// Replace the seat configuration, e.g. when resuming with new opponents
    pub fn reconfigure(&mut self, seats: Seats) {
        tracing::info!(
            "[SESSION] Reconfigured {}: white={:?} black={:?}",
            self.session_id,
            seats.white,
            seats.black
        );
        self.seats = seats;
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::for_seats(&self.seats)
    }
}

/// Colour the human asked to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPreference {
    #[default]
    White,
    Black,
    Random,
}

impl ColorPreference {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "white" | "w" => Some(ColorPreference::White),
            "black" | "b" => Some(ColorPreference::Black),
            "random" | "r" => Some(ColorPreference::Random),
            _ => None,
        }
    }

    /// Pick a concrete colour, tossing a coin for `Random`
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> PieceColor {
        match self {
            ColorPreference::White => PieceColor::White,
            ColorPreference::Black => PieceColor::Black,
            ColorPreference::Random => {
                if rng.random_bool(0.5) {
                    PieceColor::White
                } else {
                    PieceColor::Black
                }
            }
        }
    }
}

/// Parameters for creating a new game on the authority
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewGameConfig {
    VsBot {
        human: ColorPreference,
        /// Bot identifier; the authority picks its default when `None`
        bot: Option<String>,
    },
    Exhibition {
        white_bot: String,
        black_bot: String,
    },
}

/// A [`NewGameConfig`] with the human's colour already decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionRequest {
    VsBot {
        human: PieceColor,
        bot: Option<String>,
    },
    Exhibition {
        white_bot: String,
        black_bot: String,
    },
}

impl NewGameConfig {
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> SessionRequest {
        match self {
            NewGameConfig::VsBot { human, bot } => SessionRequest::VsBot {
                human: human.resolve(rng),
                bot: bot.clone(),
            },
            NewGameConfig::Exhibition {
                white_bot,
                black_bot,
            } => SessionRequest::Exhibition {
                white_bot: white_bot.clone(),
                black_bot: black_bot.clone(),
            },
        }
    }
}

impl SessionRequest {
    /// Seat layout the new session will have
    pub fn seats(&self) -> Seats {
        match self {
            SessionRequest::VsBot { human, bot } => {
                Seats::human_vs_bot(*human, bot.clone().unwrap_or_else(|| "default".to_string()))
            }
            SessionRequest::Exhibition {
                white_bot,
                black_bot,
            } => Seats::exhibition(white_bot.clone(), black_bot.clone()),
        }
    }
}

//! Client-side board reconciliation for a server-authoritative chess game
//!
//! The authority owns the rules, legality and automated players. This crate
//! owns the picture: it renders authoritative snapshots, animates the one
//! move in flight without ghost or duplicate pieces, and turns clicks and
//! drags into gated move submissions.
//!
//! ```rust,ignore
//! let authority = HttpAuthority::new(&settings.server_url)?;
//! let client = ChessClient::new(authority, HeadlessSurface::default(), settings);
//! client.start_new_game(&NewGameConfig::VsBot { human: ColorPreference::White, bot: None }).await?;
//! client.begin_play().await?;
//! client.click_square(SquareKey(from_notation("e2")?)).await;
//! client.click_square(SquareKey(from_notation("e4")?)).await;
//! ```

pub mod client;
pub mod core;
pub mod game;
pub mod input;
pub mod networking;
pub mod rendering;

pub use client::ChessClient;
pub use core::{ClientError, ClientResult, ClientSettings};
pub use game::ai::{AutomationReport, AutomationStop};
pub use game::{ColorPreference, GameSession, NewGameConfig, SeatOccupant, Seats};
pub use input::{ClickOutcome, DragOutcome, IgnoreReason};
pub use networking::{Authority, HttpAuthority};
pub use rendering::{HeadlessSurface, SquareKey, Surface};

//! Automated players
//!
//! The authority decides automated moves; the client only asks for them at
//! the right moment and applies them exactly like a human move.
//!
//! # Flow
//!
//! After any confirmed move that leaves the turn with an automated seat:
//! 1. Re-check the turn against a fresh snapshot
//! 2. Wait the configured delay
//! 3. Request one move for that seat
//! 4. Post it as the pending move, render and animate
//! 5. Repeat while the next seat is automated, the game is not over and
//!    the exhibition is not paused

pub mod trigger;

pub use trigger::{AutomationReport, AutomationStop};

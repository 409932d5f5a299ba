//! Input module
//!
//! Click and drag front ends over one selection/submission path.
//!
//! # Architecture
//!
//! - `controller` - the `Idle` / `PieceSelected` state machine and the
//!   gated move submission shared by both front ends
//! - `drag` - press, drag and release mapped onto board cells
//!
//! Both are implemented as methods on [`crate::ChessClient`] because they
//! need the authority, the surface and the pending slot together.

pub mod controller;
pub mod drag;

pub use controller::{ClickOutcome, IgnoreReason, InputController, InputPhase};
pub use drag::{DragOutcome, DragState, cell_at};

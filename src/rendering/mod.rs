//! Rendering module
//!
//! Turns authoritative snapshots into visual state on a [`Surface`].
//!
//! # Architecture
//!
//! - `board` - coordinate mapping and the snapshot renderer
//! - `animation` - the single in-flight move animation
//! - `status` - status line, turn marker and game-over text
//! - `surface` - the DOM-like trait everything draws through
//! - `headless` - in-memory surface for the CLI and tests
//!
//! Rendering never talks to the authority. Callers fetch a fresh snapshot
//! and pass it in.

pub mod animation;
pub mod board;
pub mod headless;
pub mod status;
pub mod surface;

pub use animation::{AnimationResult, Clock, MoveAnimator, TokioClock};
pub use board::{BoardRenderer, Orientation};
pub use headless::HeadlessSurface;
pub use surface::{Highlight, OverlayId, Point, Rect, SquareKey, Surface, TextSink};

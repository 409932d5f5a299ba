//! Board rendering module
//!
//! Coordinate mapping and the snapshot-to-grid renderer.

pub mod coordinates;
pub mod renderer;

pub use coordinates::{Orientation, from_notation, to_notation, to_visual};
pub use renderer::BoardRenderer;

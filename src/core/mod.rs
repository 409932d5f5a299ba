//! Core module - error taxonomy, settings and logging shared by every component
//!
//! # Contents
//!
//! - [`error`] - [`CoreError`] for settings persistence and [`ClientError`] for
//!   the public client API
//! - [`error_handling`] - the `safe_unwrap!` macro used when a surface target
//!   has disappeared, and the status text shown for transport failures
//! - [`settings`] - [`ClientSettings`], persisted as JSON in the user's config dir
//! - [`logging`] - `tracing` subscriber setup for the binary

pub mod error;
pub mod error_handling;
pub mod logging;
pub mod settings;

pub use error::*;
pub use error_handling::GENERIC_FAILURE_STATUS;
pub use settings::ClientSettings;

//! Error types for core module
//!
//! Provides custom error types for settings persistence and for the
//! client-facing API that ties the other modules together.

use crate::game::error::NotationError;
use crate::networking::error::AuthorityError;
use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors surfaced by [`crate::client::ChessClient`] entry points
///
/// Input handlers never return these; they degrade to status text instead.
/// Only session setup reports failures to the host.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The authority could not be reached or answered with garbage
    #[error(transparent)]
    Authority(#[from] AuthorityError),

    /// A coordinate string could not be parsed
    #[error(transparent)]
    Notation(#[from] NotationError),

    /// An operation needed a session before one was initialised
    #[error("No game session has been initialised")]
    NoSession,
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

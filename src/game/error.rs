//! Error types for game module
//!
//! Provides custom error types for coordinate parsing.

use thiserror::Error;

/// Errors raised while parsing a square in file/rank notation
///
/// Authority data never produces these; seeing one means a caller passed
/// hand-written input (the CLI) or there is a client bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// Input is not exactly two characters
    #[error("Square notation must be two characters, got {input:?}")]
    Length { input: String },

    /// File letter outside a-h
    #[error("Invalid file in {input:?}, expected a-h")]
    File { input: String },

    /// Rank digit outside 1-8
    #[error("Invalid rank in {input:?}, expected 1-8")]
    Rank { input: String },
}

/// Result type alias for notation parsing
pub type NotationResult<T> = Result<T, NotationError>;

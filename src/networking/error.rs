//! Error types for talking to the game authority

use thiserror::Error;

/// Failures reaching or understanding the authority
///
/// A move the authority refuses is not an error; it comes back as an
/// unsuccessful outcome carrying the reason.
#[derive(Error, Debug)]
pub enum AuthorityError {
    /// Connection, TLS or body-read failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status with a body we could not interpret
    #[error("Authority returned HTTP {code}: {body}")]
    Status { code: u16, body: String },

    /// Response did not have the expected shape
    #[error("Malformed authority response: {0}")]
    Malformed(String),

    /// Base URL or a derived request URL is invalid
    #[error("Invalid authority URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for authority calls
pub type AuthorityResult<T> = Result<T, AuthorityError>;

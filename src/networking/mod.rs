//! Networking module
//!
//! The [`Authority`] contract and its HTTP implementation.

pub mod authority;
pub mod error;
pub mod http;

pub use authority::{Authority, AutomatedMoveOutcome, MoveOutcome};
pub use error::{AuthorityError, AuthorityResult};
pub use http::HttpAuthority;

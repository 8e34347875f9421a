//! Error types for the ability resolver collaborators.

use thiserror::Error;

/// Errors from a [`crate::MembershipOracle`].
///
/// These are infrastructure failures only. "Not a member" is `Ok(false)`.
#[derive(Debug, Error)]
pub enum MembershipError {
    /// The membership store could not be reached.
    #[error("membership store unavailable: {0}")]
    Unavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Errors from a [`crate::ResourceProvider`].
#[derive(Debug, Error)]
pub enum ResourceProviderError {
    /// The resource store could not be reached.
    #[error("resource store unavailable: {0}")]
    Unavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

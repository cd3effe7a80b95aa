//! Errors for authstr

use thiserror::Error;

/// Errors raised by the token and query-string helpers.
///
/// Each variant carries the offending input (or a rendering of it) so the
/// consuming auth client can surface a useful diagnostic. Nothing here is
/// retried or logged; errors reach the caller synchronously.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The token handed to [`decode_auth_token`](crate::decode_auth_token)
    /// was absent or zero-length.
    #[error("Token is null or empty: {0:?}")]
    TokenNullOrEmpty(String),

    /// The token did not split into `header.payload.signature`.
    ///
    /// The payload carries the input rendered as a JSON string literal so
    /// control characters stay visible in the message.
    #[error("Given token is malformed: {0}")]
    TokenMalformed(String),

    /// A percent escape inside a query-string key or value was invalid.
    #[error("Query component decoding failed: {0}")]
    QueryDecodeFailed(String),
}

/// Result type alias for authstr operations
pub type Result<T> = std::result::Result<T, Error>;

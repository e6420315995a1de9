use thiserror::Error;

/// Error type for Token authentication.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthenticationError {
    #[error("Response object required to use `authenticate_or_challenge`")]
    MissingResponseSink,

    #[error("Token not found")]
    TokenNotFound,

    #[error("HTTP Basic: Access denied.")]
    AccessDenied,
}

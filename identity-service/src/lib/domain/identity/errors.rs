use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Failures of the credential directory collaborator.
///
/// Absence is never an error: lookups report not-found as `Ok(None)` and
/// a failed credential check as `Ok(None)`. These variants are the distinct
/// channel for everything else, so callers can choose retry versus hard
/// failure instead of reading a backend outage as bad credentials.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    #[error("Username already exists: {0}")]
    UsernameTaken(String),

    #[error("Email already exists: {0}")]
    EmailTaken(String),

    #[error("No principal to update: {0}")]
    NotFound(String),

    #[error("Directory backend failure: {0}")]
    Backend(String),

    #[error("Directory request timed out: {0}")]
    Timeout(String),
}

/// Top-level error for the orchestrator flows.
///
/// Expected authentication outcomes (bad credentials, invalid or expired
/// tokens, vanished principals) never appear here; the flows report them
/// as absence in their `Option` results.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error("Token issuance failed: {0}")]
    Token(#[from] auth::TokenError),
}

use thiserror::Error;

/// Error type for password operations.
///
/// Only hashing can fail; verification answers with a plain `bool`. A
/// hashing failure means the algorithm itself is unavailable and is fatal
/// at process level, never a business outcome.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

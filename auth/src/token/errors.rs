use jsonwebtoken::Algorithm;
use thiserror::Error;

/// Error type for token issuance and codec construction.
///
/// Verification failures are deliberately not errors: `TokenCodec::verify`
/// collapses them into absence so callers cannot distinguish malformed from
/// expired tokens.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Unsupported signing algorithm {0:?}: only HMAC variants are accepted")]
    UnsupportedAlgorithm(Algorithm),

    #[error("Refresh token lifetime must be longer than the access token lifetime")]
    InvalidLifetimes,
}

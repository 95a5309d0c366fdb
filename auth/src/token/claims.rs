use serde::Deserialize;
use serde::Serialize;

/// Token kind discriminator, serialized as the `type` claim.
///
/// Verification takes the expected kind, so a refresh token presented where
/// an access token is required (or vice versa) is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Decoded content of a signed token.
///
/// `iat` and `exp` are set exclusively at issuance, never by a caller, and
/// `exp` is strictly after `iat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the principal's identifier
    pub sub: String,

    pub username: String,

    /// Present on access tokens only. Refresh tokens omit it; the current
    /// value is re-fetched from the directory when the token is redeemed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default)]
    pub is_admin: bool,

    #[serde(rename = "type")]
    pub kind: TokenKind,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

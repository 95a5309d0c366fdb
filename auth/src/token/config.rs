use std::fmt;

use chrono::Duration;
use jsonwebtoken::Algorithm;

/// Signing configuration for token issuance and verification.
///
/// Built once at process start and handed to [`super::TokenCodec::new`].
/// Defaults: HS256, 15-minute access tokens, 30-day refresh tokens.
#[derive(Clone)]
pub struct TokenConfig {
    pub(crate) secret: String,
    pub(crate) algorithm: Algorithm,
    pub(crate) access_ttl: Duration,
    pub(crate) refresh_ttl: Duration,
}

impl TokenConfig {
    /// Create a configuration with the given signing secret and defaults
    /// for everything else.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store it in environment variables or a vault, never in code
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
            access_ttl: Duration::minutes(15),
            refresh_ttl: Duration::days(30),
        }
    }

    /// Set the signing algorithm (must be an HMAC variant).
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the access-token lifetime in minutes.
    pub fn with_access_ttl_minutes(mut self, minutes: i64) -> Self {
        self.access_ttl = Duration::minutes(minutes);
        self
    }

    /// Set the refresh-token lifetime in days.
    pub fn with_refresh_ttl_days(mut self, days: i64) -> Self {
        self.refresh_ttl = Duration::days(days);
        self
    }
}

// Manual impl so the secret never leaks through debug logging.
impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::TokenClaims;
use super::claims::TokenKind;
use super::config::TokenConfig;
use super::errors::TokenError;

/// Signed-token codec: turns principal fields into time-bounded tokens
/// and back.
///
/// Issuance and verification are pure functions of the token, the configured
/// secret, and the current time. No shared mutable state, so any number of
/// callers may use one codec concurrently without coordination.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    access_ttl: chrono::Duration,
    refresh_ttl: chrono::Duration,
}

/// Internal verification outcome.
///
/// The public contract collapses every failure mode into absence; the
/// tagged variants exist so unit tests can assert the specific cause.
#[derive(Debug, PartialEq)]
enum Verification {
    Valid(TokenClaims),
    Expired,
    BadSignature,
    Malformed,
    WrongKind,
}

impl TokenCodec {
    /// Create a codec from a validated configuration.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - the algorithm is not an HMAC variant
    /// * `InvalidLifetimes` - the refresh TTL is not longer than the access TTL
    pub fn new(config: TokenConfig) -> Result<Self, TokenError> {
        match config.algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {}
            other => return Err(TokenError::UnsupportedAlgorithm(other)),
        }

        if config.refresh_ttl <= config.access_ttl {
            return Err(TokenError::InvalidLifetimes);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            algorithm: config.algorithm,
            access_ttl: config.access_ttl,
            refresh_ttl: config.refresh_ttl,
        })
    }

    /// Access-token lifetime in seconds, as reported in `expires_in` fields.
    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl.num_seconds()
    }

    /// Issue a short-lived access token carrying the full principal claims.
    ///
    /// # Errors
    /// * `EncodingFailed` - token signing failed
    pub fn issue_access_token(
        &self,
        subject: &str,
        username: &str,
        email: &str,
        is_admin: bool,
    ) -> Result<String, TokenError> {
        let now = Utc::now();

        self.encode(&TokenClaims {
            sub: subject.to_string(),
            username: username.to_string(),
            email: Some(email.to_string()),
            is_admin,
            kind: TokenKind::Access,
            iat: now.timestamp(),
            exp: (now + self.access_ttl).timestamp(),
        })
    }

    /// Issue a long-lived refresh token carrying identity claims only.
    ///
    /// Email and admin flag are deliberately omitted: they are re-fetched
    /// from the directory when the token is redeemed, so privilege changes
    /// take effect without re-login.
    ///
    /// # Errors
    /// * `EncodingFailed` - token signing failed
    pub fn issue_refresh_token(&self, subject: &str, username: &str) -> Result<String, TokenError> {
        let now = Utc::now();

        self.encode(&TokenClaims {
            sub: subject.to_string(),
            username: username.to_string(),
            email: None,
            is_admin: false,
            kind: TokenKind::Refresh,
            iat: now.timestamp(),
            exp: (now + self.refresh_ttl).timestamp(),
        })
    }

    /// Verify a token and return its claims.
    ///
    /// `Some` only if the signature is valid under the configured secret,
    /// the payload decodes to the expected claim shape, `exp` is strictly
    /// in the future, and the `type` claim matches `expected`. Every
    /// failure mode collapses into `None`; callers cannot distinguish a
    /// malformed token from an expired one.
    pub fn verify(&self, token: &str, expected: TokenKind) -> Option<TokenClaims> {
        match self.classify(token, expected) {
            Verification::Valid(claims) => Some(claims),
            _ => None,
        }
    }

    fn encode(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    fn classify(&self, token: &str, expected: TokenKind) -> Verification {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let data = match decode::<TokenClaims>(token, &self.decoding_key, &validation) {
            Ok(data) => data,
            Err(e) => {
                return match e.kind() {
                    ErrorKind::ExpiredSignature => Verification::Expired,
                    ErrorKind::InvalidSignature => Verification::BadSignature,
                    _ => Verification::Malformed,
                }
            }
        };

        // jsonwebtoken accepts exp == now; the contract requires exp to be
        // strictly in the future
        if data.claims.exp <= Utc::now().timestamp() {
            return Verification::Expired;
        }

        if data.claims.kind != expected {
            return Verification::WrongKind;
        }

        Verification::Valid(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_at_least_32_bytes!";

    fn codec() -> TokenCodec {
        TokenCodec::new(TokenConfig::new(SECRET)).expect("Failed to build codec")
    }

    /// Encode arbitrary claims with the test secret, bypassing the codec's
    /// own timestamping.
    fn raw_token(claims: &TokenClaims) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .expect("Failed to encode raw token")
    }

    #[test]
    fn test_access_token_round_trip() {
        let codec = codec();

        let token = codec
            .issue_access_token("u1", "alice", "alice@example.com", true)
            .expect("Failed to issue token");
        let claims = codec
            .verify(&token, TokenKind::Access)
            .expect("Token should verify");

        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.email.as_deref(), Some("alice@example.com"));
        assert!(claims.is_admin);
        assert_eq!(claims.kind, TokenKind::Access);
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn test_refresh_token_round_trip() {
        let codec = codec();

        let token = codec
            .issue_refresh_token("u1", "alice")
            .expect("Failed to issue token");
        let claims = codec
            .verify(&token, TokenKind::Refresh)
            .expect("Token should verify");

        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.email, None);
        assert!(!claims.is_admin);
        assert_eq!(claims.exp - claims.iat, 30 * 24 * 60 * 60);
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let codec = codec();
        let other = TokenCodec::new(TokenConfig::new("another_secret_32_bytes_long_key!!"))
            .expect("Failed to build codec");

        let token = codec
            .issue_access_token("u1", "alice", "alice@example.com", false)
            .expect("Failed to issue token");

        assert_eq!(
            other.classify(&token, TokenKind::Access),
            Verification::BadSignature
        );
        assert!(other.verify(&token, TokenKind::Access).is_none());
    }

    #[test]
    fn test_verify_tampered_token() {
        let codec = codec();

        let token = codec
            .issue_access_token("u1", "alice", "alice@example.com", false)
            .expect("Failed to issue token");

        // Flip one character in the payload segment
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        let payload = &parts[1];
        let flipped = if payload.starts_with('A') { "B" } else { "A" };
        parts[1] = format!("{}{}", flipped, &payload[1..]);
        let tampered = parts.join(".");

        assert!(codec.verify(&tampered, TokenKind::Access).is_none());
    }

    #[test]
    fn test_verify_garbage_is_malformed() {
        let codec = codec();

        assert_eq!(
            codec.classify("not.a.token", TokenKind::Access),
            Verification::Malformed
        );
        assert!(codec.verify("", TokenKind::Access).is_none());
    }

    #[test]
    fn test_verify_expired_token() {
        let codec = codec();
        let now = Utc::now().timestamp();

        let token = raw_token(&TokenClaims {
            sub: "u1".to_string(),
            username: "alice".to_string(),
            email: Some("alice@example.com".to_string()),
            is_admin: false,
            kind: TokenKind::Access,
            iat: now - 1000,
            exp: now - 1,
        });

        assert_eq!(
            codec.classify(&token, TokenKind::Access),
            Verification::Expired
        );
        assert!(codec.verify(&token, TokenKind::Access).is_none());
    }

    #[test]
    fn test_verify_token_at_exact_expiry() {
        let codec = codec();
        let now = Utc::now().timestamp();

        // exp == now is not strictly in the future
        let token = raw_token(&TokenClaims {
            sub: "u1".to_string(),
            username: "alice".to_string(),
            email: None,
            is_admin: false,
            kind: TokenKind::Access,
            iat: now - 900,
            exp: now,
        });

        assert_eq!(
            codec.classify(&token, TokenKind::Access),
            Verification::Expired
        );
    }

    #[test]
    fn test_cross_kind_use_is_rejected() {
        let codec = codec();

        let refresh = codec
            .issue_refresh_token("u1", "alice")
            .expect("Failed to issue token");
        let access = codec
            .issue_access_token("u1", "alice", "alice@example.com", false)
            .expect("Failed to issue token");

        assert_eq!(
            codec.classify(&refresh, TokenKind::Access),
            Verification::WrongKind
        );
        assert!(codec.verify(&refresh, TokenKind::Access).is_none());
        assert!(codec.verify(&access, TokenKind::Refresh).is_none());
    }

    #[test]
    fn test_new_rejects_asymmetric_algorithm() {
        let config = TokenConfig::new(SECRET).with_algorithm(Algorithm::RS256);

        assert!(matches!(
            TokenCodec::new(config),
            Err(TokenError::UnsupportedAlgorithm(Algorithm::RS256))
        ));
    }

    #[test]
    fn test_new_rejects_inverted_lifetimes() {
        // 31 days of access TTL against the default 30-day refresh TTL
        let config = TokenConfig::new(SECRET).with_access_ttl_minutes(31 * 24 * 60);

        assert!(matches!(
            TokenCodec::new(config),
            Err(TokenError::InvalidLifetimes)
        ));
    }
}

use std::sync::Arc;

use auth::TokenCodec;
use auth::TokenKind;

use crate::identity::errors::AuthError;
use crate::identity::models::CreateUserCommand;
use crate::identity::models::LoginRequest;
use crate::identity::models::LoginResponse;
use crate::identity::models::TokenResponse;
use crate::identity::models::User;
use crate::identity::ports::CredentialDirectory;

/// Credential lifecycle orchestrator.
///
/// Composes the token codec with the credential directory to implement
/// login, refresh, and token-to-principal resolution. Holds no per-call
/// state: every flow is fully determined by its inputs and the two
/// collaborators, so calls may run with unbounded concurrency.
pub struct AuthService<D>
where
    D: CredentialDirectory,
{
    directory: Arc<D>,
    codec: Arc<TokenCodec>,
}

impl<D> AuthService<D>
where
    D: CredentialDirectory,
{
    pub fn new(directory: Arc<D>, codec: Arc<TokenCodec>) -> Self {
        Self { directory, codec }
    }

    /// Authenticate primary credentials and issue a token pair.
    ///
    /// The directory is consulted exactly once per attempt. `Ok(None)`
    /// means the credentials did not resolve to a principal; the caller
    /// maps it to a generic not-authenticated outcome. Nothing is stored
    /// on success: the returned token strings are the whole session.
    ///
    /// # Errors
    /// * `Directory` - the directory backend failed
    /// * `Token` - token signing failed
    pub async fn login(&self, request: LoginRequest) -> Result<Option<LoginResponse>, AuthError> {
        let Some(user) = self.directory.authenticate(&request).await? else {
            tracing::debug!(username = %request.username, "Login rejected");
            return Ok(None);
        };

        let access_token = self.codec.issue_access_token(
            &user.id,
            &user.username,
            user.email.as_str(),
            user.is_admin,
        )?;
        let refresh_token = self.codec.issue_refresh_token(&user.id, &user.username)?;

        Ok(Some(LoginResponse::new(
            access_token,
            refresh_token,
            self.codec.access_ttl_seconds(),
            user,
        )))
    }

    /// Redeem a refresh token for a new access token.
    ///
    /// The new token is issued from the principal's *current* directory
    /// record, not the stale refresh-token claims, so privilege changes
    /// since the refresh token was issued are honored. The refresh token
    /// itself is neither rotated nor revoked; it stays valid until its
    /// own expiry.
    ///
    /// # Errors
    /// * `Directory` - the directory backend failed
    /// * `Token` - token signing failed
    pub async fn refresh(&self, refresh_token: &str) -> Result<Option<TokenResponse>, AuthError> {
        let Some(user) = self
            .resolve_subject(refresh_token, TokenKind::Refresh)
            .await?
        else {
            return Ok(None);
        };

        let access_token = self.codec.issue_access_token(
            &user.id,
            &user.username,
            user.email.as_str(),
            user.is_admin,
        )?;

        Ok(Some(TokenResponse::new(
            access_token,
            self.codec.access_ttl_seconds(),
        )))
    }

    /// Resolve an access token to its principal.
    ///
    /// `Ok(None)` for an invalid, expired, or wrong-kind token, and for a
    /// structurally valid token whose principal no longer exists.
    pub async fn current_user(&self, access_token: &str) -> Result<Option<User>, AuthError> {
        self.resolve_subject(access_token, TokenKind::Access).await
    }

    /// Create a new principal in the directory.
    pub async fn register(&self, command: CreateUserCommand) -> Result<User, AuthError> {
        Ok(self.directory.create(command).await?)
    }

    /// Shared verify-then-resolve step: check the token under the expected
    /// kind, then fetch the principal its subject claim points at.
    async fn resolve_subject(
        &self,
        token: &str,
        kind: TokenKind,
    ) -> Result<Option<User>, AuthError> {
        let Some(claims) = self.codec.verify(token, kind) else {
            return Ok(None);
        };

        Ok(self.directory.find_by_id(&claims.sub).await?)
    }
}

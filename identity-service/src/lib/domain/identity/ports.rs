use async_trait::async_trait;

use crate::identity::errors::DirectoryError;
use crate::identity::models::CreateUserCommand;
use crate::identity::models::LoginRequest;
use crate::identity::models::User;

/// Capability port for the external user directory.
///
/// The orchestrator depends on this contract, never a concrete backend;
/// a production store and the in-memory implementation both satisfy it.
/// Every operation may suspend on I/O and must be treated as potentially
/// blocking. Not-found conditions are absence, never an error;
/// `DirectoryError` is reserved for backend failures.
#[async_trait]
pub trait CredentialDirectory: Send + Sync + 'static {
    /// Verify primary credentials and return the matching principal.
    ///
    /// `None` covers both unknown username and wrong password; callers
    /// cannot tell the two apart.
    ///
    /// # Errors
    /// * `Backend` / `Timeout` - the directory backend failed
    async fn authenticate(
        &self,
        credentials: &LoginRequest,
    ) -> Result<Option<User>, DirectoryError>;

    /// Retrieve a principal by its identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DirectoryError>;

    /// Retrieve a principal by its unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DirectoryError>;

    /// Create a new principal.
    ///
    /// # Errors
    /// * `UsernameTaken` / `EmailTaken` - uniqueness violation
    /// * `Backend` - the directory backend failed
    async fn create(&self, command: CreateUserCommand) -> Result<User, DirectoryError>;

    /// Update a principal's mutable fields.
    ///
    /// `id` and `username` are immutable; implementations keep the stored
    /// values for both.
    ///
    /// # Errors
    /// * `NotFound` - no principal with this id
    /// * `Backend` - the directory backend failed
    async fn update(&self, user: User) -> Result<User, DirectoryError>;

    /// Delete a principal. Returns whether a record was removed.
    async fn delete(&self, id: &str) -> Result<bool, DirectoryError>;
}
